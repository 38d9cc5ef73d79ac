//! Error types for u-tsp.

use thiserror::Error as ThisError;

/// Errors produced by tour construction and improvement.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The input violates a hard contract (empty city set, non-finite
    /// coordinates, out-of-range start city, instance too large).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A sub-range reversal was requested with `i >= j` or `j` past the end.
    #[error("invalid swap range [{i}, {j}] for tour of length {len}")]
    InvalidSwapRange {
        /// Requested start position.
        i: usize,
        /// Requested end position.
        j: usize,
        /// Length of the tour at the time of the request.
        len: usize,
    },

    /// A configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Builds an [`Error::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
