//! Error types for skills directory operations

use std::path::PathBuf;
use thiserror::Error;

/// Skills library errors
#[derive(Debug, Error)]
pub enum SkillsError {
    /// No skills directory between the start path and the filesystem root
    #[error("Could not find '{dir_name}' directory from {}", .start.display())]
    SkillsDirNotFound {
        /// Directory name that was searched for
        dir_name: String,
        /// Where the upward search began
        start: PathBuf,
    },

    /// A configured skills directory is missing or not a directory
    #[error("Configured skills directory {} does not exist or is not a directory", .path.display())]
    ConfiguredDirMissing {
        /// Path taken from configuration
        path: PathBuf,
    },

    /// An I/O operation on a specific path failed
    #[error("I/O error on {}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SkillsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillsError>;
