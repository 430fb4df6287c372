//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`InventoryError`, `BattleError`, `RestoreError`) live here as well,
//! since the crate is small enough that every caller sees all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error enum
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Side Effects**: Errors are plain values; logging is up to the caller

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The request was valid but the simulation could not settle it
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with different combatants or settings.
    ///
    /// Examples: battle stalemate
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown roster index, item not equipped
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised when manipulating a character's inventory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("item `{item}` is not equipped")]
    NotEquipped { item: String },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotEquipped { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEquipped { .. } => "INVENTORY_NOT_EQUIPPED",
        }
    }
}

/// Errors raised when a battle cannot produce a winner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("no character at roster index {index}")]
    UnknownCombatant { index: usize },

    #[error("character at roster index {index} cannot battle itself")]
    SameCombatant { index: usize },

    #[error("battle ended in a stalemate after {rounds} rounds")]
    Stalemate { rounds: u32 },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCombatant { .. } | Self::SameCombatant { .. } => {
                ErrorSeverity::Validation
            }
            Self::Stalemate { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCombatant { .. } => "BATTLE_UNKNOWN_COMBATANT",
            Self::SameCombatant { .. } => "BATTLE_SAME_COMBATANT",
            Self::Stalemate { .. } => "BATTLE_STALEMATE",
        }
    }
}

/// Errors raised when saved totals cannot be turned back into a character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    #[error("{stat} of `{name}` is out of range once item bonuses are removed")]
    StatOutOfRange { name: String, stat: &'static str },
}

impl GameError for RestoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StatOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StatOutOfRange { .. } => "RESTORE_STAT_OUT_OF_RANGE",
        }
    }
}
