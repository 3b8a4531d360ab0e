//! Repository layer for persisted game data.
//!
//! Repositories hold data that outlives one invocation:
//! - Game state, one fixed-size record per identity
//! - The shared highscore table
//!
//! Each concern has a file-backed implementation and an in-memory one for
//! tests and local runs.

mod error;
mod file;
mod memory;
mod traits;

pub use error::RepositoryError;
pub use file::{FileHighscoreRepository, FileStateRepository};
pub use memory::{InMemoryHighscoreRepo, InMemoryStateRepo};
pub use traits::{HighscoreRepository, StateRepository};

pub type Result<T> = std::result::Result<T, RepositoryError>;
