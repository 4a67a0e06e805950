//! init-skill - Scaffold a new skill bundle from built-in templates

use anyhow::Result;
use clap::Parser;
use skill_scaffolder::{
    create_bundle, print_error, print_summary, ConsoleReporter, Identifier, ScaffoldConfig,
    ScriptLanguage,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "init-skill")]
#[command(about = "Initialize a new skill from template")]
#[command(version)]
pub struct Args {
    /// Name of the skill (lowercase, hyphens)
    pub skill_name: String,

    /// Directory where the skill will be created
    #[arg(short, long)]
    pub path: PathBuf,

    /// Language of the example script under scripts/
    #[arg(long, value_enum, default_value_t = ScriptLanguage::Python)]
    pub script: ScriptLanguage,

    /// Enable verbose logging (debug level, written to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Args> for ScaffoldConfig {
    fn from(args: &Args) -> Self {
        ScaffoldConfig::default().with_script(args.script)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let identifier = Identifier::parse(&args.skill_name)?;
    tracing::debug!(identifier = %identifier, path = %args.path.display(), "initializing skill");

    let bundle_dir = create_bundle(
        &identifier,
        &args.path,
        &ScaffoldConfig::from(args),
        &mut ConsoleReporter,
    )?;

    print_summary(identifier.as_str(), &bundle_dir);
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only user feedback
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
