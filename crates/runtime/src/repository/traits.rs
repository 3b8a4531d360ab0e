//! Repository contracts for saving and loading persisted data.

use game_core::{GameState, HighscoreEntry, HighscoreTable, Identity};

use super::Result;

/// Repository for game state persistence, keyed by identity.
///
/// A record is written atomically: readers see either the previous state or
/// the new one, never a mix.
pub trait StateRepository: Send + Sync {
    /// Save a game state under its own identity.
    fn save(&self, state: &GameState) -> Result<()>;

    /// Load the state for `identity`. `Ok(None)` when nothing was saved yet.
    fn load(&self, identity: Identity) -> Result<Option<GameState>>;

    /// Check if a state exists
    fn exists(&self, identity: Identity) -> bool;

    /// Delete a state. Deleting a missing state is not an error.
    fn delete(&self, identity: Identity) -> Result<()>;

    /// List every identity with a saved state, sorted.
    fn list_identities(&self) -> Result<Vec<Identity>> {
        Ok(vec![])
    }
}

/// Repository for the highscore table.
pub trait HighscoreRepository: Send + Sync {
    /// Load the table. A table that was never saved loads empty.
    fn load(&self) -> Result<HighscoreTable>;

    fn save(&self, table: &HighscoreTable) -> Result<()>;

    /// Offers `entry` to the table and persists it if it placed.
    ///
    /// Returns the rank the entry took.
    fn record(&self, entry: HighscoreEntry) -> Result<Option<usize>> {
        let mut table = self.load()?;
        let rank = table.insert(entry);
        if rank.is_some() {
            self.save(&table)?;
        }
        Ok(rank)
    }
}
