//! Error types for roster-check.

use thiserror::Error;

/// Result type for roster-check operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Snapshot could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or output JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad tier argument
    #[error("{0}")]
    Tier(#[from] roster_eligibility::Error),

    /// Bad command line
    #[error("usage: {0}")]
    Usage(String),
}
