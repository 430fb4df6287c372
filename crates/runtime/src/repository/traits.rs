//! Repository contracts for saving and loading the roster.

use super::Result;
use super::types::SaveFile;

/// Repository for whole-roster saves.
///
/// A repository addresses exactly one save slot; callers pick the slot when
/// constructing the repository (for files, the path).
pub trait SaveRepository: Send + Sync {
    /// Overwrite the slot with `save`.
    fn save(&self, save: &SaveFile) -> Result<()>;

    /// Read the slot back.
    ///
    /// Fails with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// if nothing was ever saved.
    fn load(&self) -> Result<SaveFile>;

    /// Check if the slot holds a save
    fn exists(&self) -> bool;

    /// Clear the slot. Clearing an empty slot is not an error.
    fn delete(&self) -> Result<()>;
}
