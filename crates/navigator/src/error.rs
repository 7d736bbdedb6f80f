//! Error types for the navigator crate.

use thiserror::Error;

/// Result type alias for navigator construction.
pub type Result<T> = std::result::Result<T, NavigatorError>;

/// Errors raised while building a navigator.
///
/// Once built, every navigator operation is infallible: invalid calls are
/// ignored rather than reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigatorError {
    /// A stage set needs at least one stage
    #[error("Stage set is empty")]
    EmptyStageSet,

    /// Stage names double as deep-link fragments and must be unique
    #[error("Duplicate stage name: {0}")]
    DuplicateStage(String),

    /// Gesture or timing settings out of range
    #[error("Invalid navigator setting: {0}")]
    InvalidSetting(String),
}
