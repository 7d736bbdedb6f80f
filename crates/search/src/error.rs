//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search.
///
/// Ranking itself never fails; these only surface when a caller asks why a
/// query produced nothing, or when records arrive as JSON.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Query shorter than the configured minimum after trimming
    #[error("Query must be at least {min} characters (got {len})")]
    QueryTooShort {
        /// Configured minimum
        min: usize,
        /// Trimmed length in characters
        len: usize,
    },

    /// Records could not be decoded
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
