//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the rules and the repositories so clients can bubble
//! them up with consistent context.
use thiserror::Error;

use game_core::{BattleError, ErrorSeverity, GameError, InventoryError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no character at roster index {index}")]
    UnknownCharacter { index: usize },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity of the underlying failure.
    ///
    /// Repository failures are always fatal for the operation at hand since
    /// nothing retries them.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCharacter { .. } => ErrorSeverity::Validation,
            Self::Inventory(err) => err.severity(),
            Self::Battle(err) => err.severity(),
            Self::Repository(_) => ErrorSeverity::Fatal,
        }
    }
}
