//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::types::SaveFile;
use crate::repository::{RepositoryError, Result, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// Stores the roster as pretty-printed JSON at a caller-supplied path. There
/// is no default location.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository writing to `path`.
    ///
    /// Nothing is touched on disk until the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, save: &SaveFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(save)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} characters to {}",
            save.len(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<SaveFile> {
        if !self.path.exists() {
            return Err(RepositoryError::NotFound {
                path: self.path.display().to_string(),
            });
        }

        let json = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let save: SaveFile =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!(
            "Loaded {} characters from {}",
            save.len(),
            self.path.display()
        );

        Ok(save)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted save {}", self.path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::types::{CharacterRecord, ItemRecord};
    use tempfile::TempDir;

    fn sample() -> SaveFile {
        SaveFile {
            characters: vec![CharacterRecord {
                name: "Conan".into(),
                level: 1,
                health: 76.5,
                attack: 18,
                defense: 7,
                experience: 10,
                inventory: vec![ItemRecord {
                    name: "Sword".into(),
                    item_type: "weapon".into(),
                    attack_bonus: 3,
                    defense_bonus: 0,
                }],
            }],
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSaveRepository::new(temp_dir.path().join("game.json"));

        assert!(!repo.exists());
        repo.save(&sample()).unwrap();
        assert!(repo.exists());

        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSaveRepository::new(temp_dir.path().join("saves/slot1.json"));

        repo.save(&sample()).unwrap();
        repo.save(&SaveFile::default()).unwrap();

        assert!(repo.load().unwrap().is_empty());
        assert!(!temp_dir.path().join("saves/slot1.json.tmp").exists());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSaveRepository::new(temp_dir.path().join("absent.json"));

        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert!(err.is_io());
    }

    #[test]
    fn test_malformed_file_is_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, r#"{"characters": [{"name": "Half"#).unwrap();

        let err = FileSaveRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, RepositoryError::Json(_)));
        assert!(err.is_parse());
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSaveRepository::new(temp_dir.path().join("game.json"));

        repo.delete().unwrap();
        repo.save(&sample()).unwrap();
        repo.delete().unwrap();
        assert!(!repo.exists());
    }
}
