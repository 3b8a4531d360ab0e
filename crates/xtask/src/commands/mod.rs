//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod play;
mod read_state;

pub use clean::Clean;
pub use play::Play;
pub use read_state::ReadState;
