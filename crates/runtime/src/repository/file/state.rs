//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{GameState, Identity, decode_state, encode_state};

use super::write_atomic;
use crate::repository::{RepositoryError, Result, StateRepository};

/// File-based implementation of StateRepository.
///
/// # File Format
///
/// Each identity owns `{identity}.state` holding exactly one fixed-size
/// binary state record (see [`game_core::codec`]). Identities are restricted
/// to `[A-Za-z0-9_-]`, so they are always safe file names.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    const EXTENSION: &'static str = "state";

    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a state file.
    pub fn state_path(&self, identity: Identity) -> PathBuf {
        self.base_dir.join(format!("{identity}.{}", Self::EXTENSION))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, state: &GameState) -> Result<()> {
        let path = self.state_path(state.identity);
        write_atomic(&path, &encode_state(state)).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved state[{}] to {}", state.identity, path.display());

        Ok(())
    }

    fn load(&self, identity: Identity) -> Result<Option<GameState>> {
        let path = self.state_path(identity);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state = decode_state(&bytes)
            .map_err(|e| RepositoryError::corrupted(path.display().to_string(), e))?;
        if state.identity != identity {
            return Err(RepositoryError::IdentityMismatch {
                key: path.display().to_string(),
                expected: identity,
                found: state.identity,
            });
        }

        tracing::debug!("Loaded state[{}] from {}", identity, path.display());

        Ok(Some(state))
    }

    fn exists(&self, identity: Identity) -> bool {
        self.state_path(identity).exists()
    }

    fn delete(&self, identity: Identity) -> Result<()> {
        let path = self.state_path(identity);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted state[{}]", identity);
        }

        Ok(())
    }

    fn list_identities(&self) -> Result<Vec<Identity>> {
        let mut identities = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some(Self::EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && let Ok(identity) = Identity::new(stem)
            {
                identities.push(identity);
            }
        }

        identities.sort_unstable();
        Ok(identities)
    }
}
