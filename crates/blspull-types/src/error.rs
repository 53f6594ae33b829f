//! Error types for blspull.

use thiserror::Error;

/// Result type alias for blspull operations.
pub type Result<T> = std::result::Result<T, PullError>;

/// Errors that can abort a fetch cycle.
///
/// Every variant leaves the dataset and state files untouched; an empty but
/// well-formed response is not an error (see `FetchOutcome::NoData` in the
/// pipeline crate).
#[derive(Error, Debug)]
pub enum PullError {
    /// HTTP transport failure or non-success status.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Response JSON did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A data point's year or value could not be interpreted.
    #[error("bad data point: {0}")]
    ParseFailure(String),

    /// Persistent store failure.
    #[error("store error: {0}")]
    Store(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
