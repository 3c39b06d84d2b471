//! Error types for the viewer.

use thiserror::Error;
use vocab_core::DatasetError;

/// Underlying cause of a failed load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Viewer error types.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The card dataset could not be read. Fatal for the session.
    #[error("Failed to load flashcards from {path}: {source}")]
    DatasetLoad { path: String, source: LoadError },

    /// The locale table could not be read. The viewer keeps the default locale.
    #[error("Failed to load translations from {path}: {source}")]
    LocaleLoad { path: String, source: LoadError },
}

/// Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
