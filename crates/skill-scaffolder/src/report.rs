//! User-facing progress output

use colored::Colorize;
use console::Emoji;
use std::fmt;
use std::path::Path;

static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[error] ");
static DONE: Emoji<'_, '_> = Emoji("🎉 ", "");

/// A completed step of bundle creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The bundle root was created (absolute path)
    DirectoryCreated(&'a Path),

    /// A file was written (path relative to the bundle root, `/`-separated)
    FileWritten(&'a str),
}

/// Receives a `Progress` event after every successful step
pub trait Reporter {
    fn report(&mut self, event: Progress<'_>);
}

/// Prints a confirmation line per step to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: Progress<'_>) {
        println!("{}{}", SUCCESS, event);
    }
}

/// Discards all events
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: Progress<'_>) {}
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::DirectoryCreated(path) => {
                write!(f, "Created skill directory: {}", path.display())
            }
            Progress::FileWritten(file) => write!(f, "Created {}", file),
        }
    }
}

/// Follow-up actions suggested after a bundle is created
pub fn next_steps() -> Vec<String> {
    vec![
        "Edit SKILL.md with your skill's instructions".to_string(),
        "Add scripts, references, or assets as needed".to_string(),
        "Delete unused directories".to_string(),
    ]
}

/// Print the closing summary for a created bundle
pub fn print_summary(identifier: &str, bundle_dir: &Path) {
    println!();
    println!(
        "{}{} '{}' initialized at: {}",
        DONE,
        "Skill".green().bold(),
        identifier,
        bundle_dir.display()
    );
    println!();
    println!("{}", "Next steps:".bold());

    for (i, step) in next_steps().iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}

/// Print a marked error line
pub fn print_error(err: impl fmt::Display) {
    println!("{}{} {}", FAILURE, "Error:".red().bold(), err);
}
