//! Deterministic game logic and data types for the grid game.
//!
//! `game-core` defines the canonical rules (movement patterns, action
//! resolution, enemy turns), the authoritative [`GameState`] and its wire
//! formats. It performs no I/O and never reads a global RNG, so the runtime
//! and offline tools can share it. All state transitions flow through
//! [`engine::GameEngine`]; supporting crates depend on the types re-exported
//! here.
pub mod action;
pub mod codec;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod highscore;
pub mod movement;
pub mod state;
pub mod view;

pub use action::{Action, ActionRecord, ActionTag};
pub use codec::{
    DecodeError, STATE_HEX_LEN, STATE_RECORD_SIZE, decode_action, decode_state,
    decode_state_hex, encode_action, encode_state, encode_state_hex,
};
pub use config::GameConfig;
pub use engine::{EnemyReport, GameEngine, Rejection, Resolution, TurnOutcome};
pub use env::{PcgRng, RngOracle, RngStream};
pub use error::{ErrorSeverity, GameError};
pub use highscore::{HIGHSCORE_RECORD_SIZE, HighscoreEntry, HighscoreTable};
pub use movement::{MovementPattern, legal_moves};
pub use state::{
    Enemies, Entity, GameState, Identity, IdentityError, InitParams, Obstacles, Position,
    StateError,
};
pub use view::{BoardView, MoveKind, MoveLink, PatternLink};
