//! Error types for catalog checks.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that stop a run before or while reporting.
///
/// Diagnostics found by the individual checks are never represented here;
/// they are collected into a [`crate::CheckOutcome`] instead.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{file} not found at {}", .path.display())]
    NotFound { file: String, path: PathBuf },

    #[error("Error loading {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Whether this error comes from loading the manifest or schema file.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, CheckError::Io(_))
    }
}
