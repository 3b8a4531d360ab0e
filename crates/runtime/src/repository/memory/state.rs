//! In-memory StateRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::{GameState, Identity};

use crate::repository::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
#[derive(Default)]
pub struct InMemoryStateRepo {
    states: RwLock<HashMap<Identity, GameState>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with `state` already saved.
    pub fn with_state(state: GameState) -> Self {
        let mut states = HashMap::new();
        states.insert(state.identity, state);
        Self {
            states: RwLock::new(states),
        }
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.insert(state.identity, state.clone());
        Ok(())
    }

    fn load(&self, identity: Identity) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(&identity).cloned())
    }

    fn exists(&self, identity: Identity) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(&identity))
            .unwrap_or(false)
    }

    fn delete(&self, identity: Identity) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(&identity);
        Ok(())
    }

    fn list_identities(&self) -> Result<Vec<Identity>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut identities: Vec<Identity> = states.keys().copied().collect();
        identities.sort_unstable();
        Ok(identities)
    }
}
