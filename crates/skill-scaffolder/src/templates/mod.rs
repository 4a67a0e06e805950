//! Built-in bundle templates
//!
//! This module provides:
//! - The `SKILL.md` manifest template and its YAML front matter types
//! - Placeholder script templates, one per `ScriptLanguage`
//! - The reference and asset placeholders
//! - `render`, a plain `{key}` substitution over those templates

pub mod language;
pub mod manifest;
pub mod resources;

pub use language::ScriptLanguage;
pub use manifest::{parse_front_matter, render_manifest, SkillFrontMatter};
pub use resources::{render_asset, render_reference, render_script};

/// Replace every `{key}` in `template` with its value.
///
/// Unknown placeholders are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}
