//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

use blspull_types::PullError;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the file-backed stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to stage a temporary file next to the target.
    #[error("Failed to create temporary file in '{dir}': {source}")]
    CreateTemp {
        /// The directory the temporary file was staged in.
        dir: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to move the staged file into place.
    #[error("Failed to replace '{path}': {source}")]
    Replace {
        /// The path that could not be replaced.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A dataset file carried an unexpected header row.
    #[error("Unexpected header in '{path}'")]
    BadHeader {
        /// The offending dataset file.
        path: PathBuf,
    },

    /// A dataset row could not be interpreted.
    #[error("Bad row at line {line} of '{path}'")]
    ParseRow {
        /// The offending dataset file.
        path: PathBuf,
        /// One-based line number of the bad row.
        line: usize,
    },

    /// Failed to serialize the state record.
    #[error("Failed to serialize state: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

impl From<StoreError> for PullError {
    fn from(error: StoreError) -> Self {
        Self::Store(error.to_string())
    }
}
