//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using NormalizeError.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors that can occur while normalizing a single raw card record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("malformed card: {reason}")]
    Malformed { reason: String },
}

impl NormalizeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while reading a dataset document.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset has no \"flashcards\" or \"cards\" key")]
    MissingCards,

    #[error("\"{key}\" is not an array")]
    NotAnArray { key: &'static str },
}
