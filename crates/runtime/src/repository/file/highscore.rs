//! File-based HighscoreRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::HighscoreTable;

use super::write_atomic;
use crate::repository::{HighscoreRepository, RepositoryError, Result};

/// Stores the table as one fixed-size record in `highscores.bin`.
pub struct FileHighscoreRepository {
    path: PathBuf,
}

impl FileHighscoreRepository {
    const FILE_NAME: &'static str = "highscores.bin";

    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreRepository for FileHighscoreRepository {
    fn load(&self) -> Result<HighscoreTable> {
        if !self.path.exists() {
            return Ok(HighscoreTable::new());
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        HighscoreTable::decode(&bytes)
            .map_err(|e| RepositoryError::corrupted(self.path.display().to_string(), e))
    }

    fn save(&self, table: &HighscoreTable) -> Result<()> {
        write_atomic(&self.path, &table.encode()).map_err(RepositoryError::Io)?;
        tracing::debug!("Saved highscores to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use game_core::{HighscoreEntry, Identity};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_loads_empty_and_records_persist() {
        let dir = TempDir::new().unwrap();
        let repo = FileHighscoreRepository::new(dir.path()).unwrap();
        assert_eq!(repo.load().unwrap(), HighscoreTable::new());

        let entry = HighscoreEntry::new(12, Identity::new("carol").unwrap());
        assert_eq!(repo.record(entry).unwrap(), Some(0));

        let reopened = FileHighscoreRepository::new(dir.path()).unwrap();
        assert_eq!(reopened.load().unwrap().get(0), Some(&entry));
    }
}
