//! Save directory resolution
//!
//! `--data-dir` wins over `SAVE_DATA_DIR`, which wins over the platform
//! default:
//! - Linux: `~/.local/share/grid-game` (or `$XDG_DATA_HOME/grid-game`)
//! - macOS: `~/Library/Application Support/grid-game`
//! - Windows: `%APPDATA%\grid-game`
//! - Fallback: `./save_data`

use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Runtime configuration with the command line override applied.
pub fn runtime_config(data_dir: Option<PathBuf>) -> RuntimeConfig {
    let config = RuntimeConfig::from_env();
    match data_dir {
        Some(dir) => config.with_save_data_dir(dir),
        None => config,
    }
}

/// Directory holding save files.
pub fn data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    runtime_config(data_dir).save_data_dir
}
