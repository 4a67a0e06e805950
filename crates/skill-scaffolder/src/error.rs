//! Error types for bundle creation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the scaffolder
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a bundle from being created.
///
/// None of these are retried. Files written before the failing step stay on
/// disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The name is not lowercase alphanumeric with hyphens
    #[error("Skill name must be lowercase alphanumeric with hyphens (got '{name}')")]
    InvalidIdentifier { name: String },

    /// Something already occupies the bundle path
    #[error("Skill directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// A directory could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::CreationFailed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// True when the caller's input was rejected before touching the filesystem
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, ScaffoldError::InvalidIdentifier { .. })
    }

    /// True when the bundle path was already taken
    pub fn is_already_exists(&self) -> bool {
        matches!(self, ScaffoldError::AlreadyExists { .. })
    }
}
