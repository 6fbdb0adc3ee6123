//! Error types for recommendation operations.
//!
//! The public query API never surfaces these: unknown ids and degenerate
//! inputs degrade to empty results. They are returned by the building blocks
//! (vectorizers, similarity, matrix construction, configuration).

use thiserror::Error;

/// Main error type for the recommendation engine.
///
/// # Examples
///
/// ```
/// use movierec::error::RecommendError;
///
/// let err = RecommendError::DimensionMismatch {
///     expected: "3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Vector or matrix dimensions don't match for the operation.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Every document was empty or consisted solely of stop words.
    #[error("empty vocabulary: documents contain no terms after filtering")]
    EmptyVocabulary,

    /// An operation that needs at least one input got none.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Invalid hyperparameter value provided.
    #[error("invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Generic error with string message.
    #[error("{0}")]
    Other(String),
}

impl From<&str> for RecommendError {
    fn from(msg: &str) -> Self {
        RecommendError::Other(msg.to_string())
    }
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecommendError>;
