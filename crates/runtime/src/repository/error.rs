//! Error types raised by repository implementations.

use game_core::RestoreError;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no save found at {path}")]
    NotFound { path: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("invalid save record: {0}")]
    InvalidRecord(#[from] RestoreError),
}

impl RepositoryError {
    /// True for failures reading or writing the underlying medium.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::NotFound { .. })
    }

    /// True when the stored bytes could not be turned back into a save.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Json(_) | Self::InvalidRecord(_))
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
