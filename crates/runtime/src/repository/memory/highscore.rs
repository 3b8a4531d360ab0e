use std::sync::RwLock;

use game_core::HighscoreTable;

use crate::repository::{HighscoreRepository, RepositoryError, Result};

/// In-memory implementation of HighscoreRepository.
#[derive(Default)]
pub struct InMemoryHighscoreRepo {
    table: RwLock<HighscoreTable>,
}

impl InMemoryHighscoreRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighscoreRepository for InMemoryHighscoreRepo {
    fn load(&self) -> Result<HighscoreTable> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(table.clone())
    }

    fn save(&self, table: &HighscoreTable) -> Result<()> {
        let mut current = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = table.clone();
        Ok(())
    }
}
