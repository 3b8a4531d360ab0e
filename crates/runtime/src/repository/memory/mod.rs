//! In-memory repository implementations for testing and development.

mod highscore;
mod state;

pub use highscore::InMemoryHighscoreRepo;
pub use state::InMemoryStateRepo;
