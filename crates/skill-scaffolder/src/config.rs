//! Bundle creation settings

use crate::templates::ScriptLanguage;

/// Knobs for a single `create_bundle` call.
///
/// The CLI builds this from its arguments; library callers usually start from
/// `ScaffoldConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Language of the placeholder script under `scripts/`
    pub script: ScriptLanguage,

    /// Set the executable bits on the placeholder script (Unix only)
    pub executable_scripts: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            script: ScriptLanguage::Python,
            executable_scripts: true,
        }
    }
}

impl ScaffoldConfig {
    pub fn with_script(mut self, script: ScriptLanguage) -> Self {
        self.script = script;
        self
    }
}
