//! Skill Scaffolder - Shared library for creating skill bundles
//!
//! A skill bundle is a directory named after the skill that holds a `SKILL.md`
//! manifest plus `scripts/`, `references/` and `assets/` folders seeded with
//! placeholder files. This library owns everything except argument parsing,
//! so the `init-skill` binary stays a thin shell around it.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - Identifier validation, title derivation, template rendering
//! - **Layer 2: Bundle Creation** - `create_bundle` with `ScaffoldConfig` and a `Reporter`
//! - **Layer 3: Console Output** - `ConsoleReporter`, summary and error printing
//!
//! # Feature Flags
//!
//! - `cli` (default): Derives `clap::ValueEnum` for `ScriptLanguage`
//!
//! # Example Usage
//!
//! ```no_run
//! use skill_scaffolder::{create_bundle, Identifier, NullReporter, ScaffoldConfig};
//!
//! let identifier = Identifier::parse("api-helper")?;
//! let dir = create_bundle(&identifier, "skills", &ScaffoldConfig::default(), &mut NullReporter)?;
//! println!("created {}", dir.display());
//! # Ok::<(), skill_scaffolder::ScaffoldError>(())
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod identifier;
pub mod report;
pub mod templates;

// Re-export main types for convenience
pub use bundle::{create_bundle, resolve_root};
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use identifier::{derive_title, Identifier};
pub use report::{print_error, print_summary, ConsoleReporter, NullReporter, Progress, Reporter};
pub use templates::{parse_front_matter, ScriptLanguage, SkillFrontMatter};

/// File name of the manifest written at the root of every bundle
pub const MANIFEST_FILE: &str = "SKILL.md";
