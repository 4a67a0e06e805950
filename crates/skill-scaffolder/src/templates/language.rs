//! Languages available for the placeholder script

use std::fmt;

/// Supported script languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ScriptLanguage {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "python", alias = "py"))]
    Python,
    #[cfg_attr(feature = "cli", value(name = "shell", aliases = ["sh", "bash"]))]
    Shell,
    #[cfg_attr(feature = "cli", value(name = "javascript", alias = "js"))]
    JavaScript,
    #[cfg_attr(feature = "cli", value(name = "typescript", alias = "ts"))]
    TypeScript,
}

impl ScriptLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScriptLanguage::Python => "Python",
            ScriptLanguage::Shell => "Shell",
            ScriptLanguage::JavaScript => "JavaScript",
            ScriptLanguage::TypeScript => "TypeScript",
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ScriptLanguage::Python => "py",
            ScriptLanguage::Shell => "sh",
            ScriptLanguage::JavaScript => "js",
            ScriptLanguage::TypeScript => "ts",
        }
    }

    /// Name of the placeholder script, e.g. `example.py`
    pub fn script_file_name(&self) -> String {
        format!("example.{}", self.extension())
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_file_names() {
        assert_eq!(ScriptLanguage::Python.script_file_name(), "example.py");
        assert_eq!(ScriptLanguage::Shell.script_file_name(), "example.sh");
        assert_eq!(ScriptLanguage::JavaScript.script_file_name(), "example.js");
        assert_eq!(ScriptLanguage::TypeScript.script_file_name(), "example.ts");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_value_enum_aliases() {
        use clap::ValueEnum;

        assert_eq!(
            ScriptLanguage::from_str("py", true).unwrap(),
            ScriptLanguage::Python
        );
        assert_eq!(
            ScriptLanguage::from_str("bash", true).unwrap(),
            ScriptLanguage::Shell
        );
        assert_eq!(
            ScriptLanguage::from_str("javascript", true).unwrap(),
            ScriptLanguage::JavaScript
        );
        assert_eq!(
            ScriptLanguage::from_str("ts", true).unwrap(),
            ScriptLanguage::TypeScript
        );
        assert!(ScriptLanguage::from_str("ruby", true).is_err());
    }
}
