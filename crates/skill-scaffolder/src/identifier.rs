//! Skill identifiers and the titles derived from them

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// A validated skill name: lowercase ASCII letters, digits and hyphens,
/// with at least one non-hyphen character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `name` and wrap it
    pub fn parse(name: &str) -> Result<Self> {
        if is_valid(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(ScaffoldError::InvalidIdentifier {
                name: name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title, e.g. `api-helper` -> `Api Helper`
    pub fn title(&self) -> String {
        derive_title(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid(name: &str) -> bool {
    let mut stripped = name.chars().filter(|c| *c != '-').peekable();
    stripped.peek().is_some()
        && stripped.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Split on `-`, capitalize each non-empty segment and join with single spaces
pub fn derive_title(name: &str) -> String {
    name.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title("api-helper"), "Api Helper");
        assert_eq!(derive_title("x"), "X");
        assert_eq!(derive_title("my-new-skill"), "My New Skill");
        assert_eq!(derive_title("pdf2-text"), "Pdf2 Text");
    }

    #[test]
    fn test_derive_title_skips_empty_segments() {
        assert_eq!(derive_title("-lead--double-"), "Lead Double");
    }

    #[test]
    fn test_derive_title_lowercases_tail() {
        assert_eq!(derive_title("hELLO-wORLD"), "Hello World");
    }

    #[test]
    fn test_valid_identifiers() {
        for name in ["api-helper", "x", "123", "a-1-b", "-edge-", "v2"] {
            assert!(Identifier::parse(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in [
            "", "-", "---", "Api", "bad_name!", "with space", "snake_case", "dot.name", "émoji",
        ] {
            let err = Identifier::parse(name).unwrap_err();
            assert!(err.is_invalid_identifier(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_identifier_title_and_display() {
        let id = Identifier::parse("my-new-skill").unwrap();
        assert_eq!(id.as_str(), "my-new-skill");
        assert_eq!(id.to_string(), "my-new-skill");
        assert_eq!(id.title(), "My New Skill");
    }
}
