//! Error types for page surgery.

use thiserror::Error;

/// Result type for page operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while locating or mutating an array literal.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The named array literal is not present in the document. Never
    /// treated as an empty array — the operation aborts with the document
    /// untouched.
    #[error("array literal 'const {name} = [...]' not found in document")]
    ArrayNotFound {
        /// Name of the array that was searched for.
        name: String,
    },

    /// A search pattern failed to compile. Key and value text is escaped
    /// before being spliced into patterns, so this indicates a bug rather
    /// than bad input.
    #[error("invalid search pattern: {message}")]
    Pattern {
        /// Description from the regex engine.
        message: String,
    },
}

impl PatchError {
    /// Creates an array-not-found error.
    pub fn array_not_found(name: impl Into<String>) -> Self {
        Self::ArrayNotFound { name: name.into() }
    }

    /// Creates a pattern error.
    pub fn pattern(source: &regex::Error) -> Self {
        Self::Pattern {
            message: source.to_string(),
        }
    }
}
