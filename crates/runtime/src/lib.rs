//! Runtime orchestration for the grid game.
//!
//! This crate wires the pure `game-core` engine to persistence. Consumers
//! build a [`Runtime`] over a [`StateRepository`] and a
//! [`HighscoreRepository`] and feed it action text, one turn per call.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the turn orchestrator
//! - [`repository`] provides file-backed and in-memory persistence
//! - [`config`] and [`error`] carry configuration and failures
pub mod config;
pub mod error;
pub mod repository;
pub mod runtime;

pub use config::{RuntimeConfig, default_data_dir};
pub use error::{Result, RuntimeError};
pub use repository::{
    FileHighscoreRepository, FileStateRepository, HighscoreRepository, InMemoryHighscoreRepo,
    InMemoryStateRepo, RepositoryError, StateRepository,
};
pub use runtime::{Runtime, TurnKind, TurnReport};

/// Runtime over the file repositories rooted at `config.save_data_dir`.
pub type FileRuntime = Runtime<FileStateRepository, FileHighscoreRepository>;

impl FileRuntime {
    /// Opens (creating if needed) the save directory from `config`.
    pub fn open(config: RuntimeConfig) -> std::result::Result<Self, RepositoryError> {
        let states = FileStateRepository::new(&config.save_data_dir)?;
        let highscores = FileHighscoreRepository::new(&config.save_data_dir)?;
        Ok(Runtime::new(config, states, highscores))
    }
}
