//! In-memory SaveRepository implementation for tests and local runs.

use std::sync::RwLock;

use crate::repository::types::SaveFile;
use crate::repository::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of SaveRepository.
pub struct InMemorySaveRepo {
    slot: RwLock<Option<SaveFile>>,
}

impl InMemorySaveRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Create with a save already in the slot.
    pub fn with_save(save: SaveFile) -> Self {
        Self {
            slot: RwLock::new(Some(save)),
        }
    }
}

impl Default for InMemorySaveRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn save(&self, save: &SaveFile) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(save.clone());
        Ok(())
    }

    fn load(&self) -> Result<SaveFile> {
        let slot = self
            .slot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slot.clone().ok_or_else(|| RepositoryError::NotFound {
            path: "<memory>".to_owned(),
        })
    }

    fn exists(&self) -> bool {
        self.slot
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_is_not_found() {
        let repo = InMemorySaveRepo::new();
        assert!(!repo.exists());
        assert!(matches!(
            repo.load(),
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[test]
    fn save_overwrites_and_delete_clears() {
        let repo = InMemorySaveRepo::with_save(SaveFile::default());
        assert!(repo.exists());

        let mut save = SaveFile::default();
        save.characters
            .push(crate::repository::CharacterRecord::from(&game_core::Character::new("Solo")));
        repo.save(&save).unwrap();
        assert_eq!(repo.load().unwrap().len(), 1);

        repo.delete().unwrap();
        assert!(!repo.exists());
    }
}
