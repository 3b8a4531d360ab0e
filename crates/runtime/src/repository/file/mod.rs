//! File-based repository implementations.

mod highscore;
mod state;

pub use highscore::FileHighscoreRepository;
pub use state::FileStateRepository;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `bytes` next to `path` and renames the temp file over it.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_path(path);
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)
}

/// `{file_name}.tmp` in the same directory, so every target has its own.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn temp_names_keep_the_full_file_name() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("highscores.state");
        let table = dir.path().join("highscores.bin");
        assert_ne!(temp_path(&state), temp_path(&table));
        assert_eq!(temp_path(&state), dir.path().join("highscores.state.tmp"));

        write_atomic(&state, b"one").unwrap();
        write_atomic(&table, b"two").unwrap();
        assert_eq!(fs::read(&state).unwrap(), b"one");
        assert_eq!(fs::read(&table).unwrap(), b"two");
        assert!(!temp_path(&state).exists());
    }
}
