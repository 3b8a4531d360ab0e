//! Turn pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. A turn
//! resolves one player action and then lets the enemies act. Every random
//! draw (new boards on reset and level completion) comes from the engine's
//! own [`RngStream`], so a seeded engine replays identically.

mod enemies;
mod resolver;

pub use enemies::{EnemyReport, choose_destination, enemy_step};
pub use resolver::{Rejection, Resolution, resolve};

use crate::action::{Action, ActionRecord};
use crate::env::{PcgRng, RngOracle, RngStream};
use crate::state::{GameState, Identity, InitParams};

/// Complete outcome of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: GameState,
    pub resolution: Resolution,
    pub enemies: EnemyReport,
}

/// Game engine driving state transitions.
pub struct GameEngine<R = PcgRng> {
    rng: RngStream<R>,
}

impl GameEngine {
    /// Engine drawing from the default PCG stream seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngStream::new(seed),
        }
    }
}

impl<R: RngOracle> GameEngine<R> {
    pub fn with_rng(rng: RngStream<R>) -> Self {
        Self { rng }
    }

    /// Deals a level-0 board for `identity`.
    pub fn new_game(&mut self, identity: Identity) -> GameState {
        GameState::init(InitParams::new_game(identity), &mut self.rng)
    }

    /// Resolves a player action without running the enemy turn.
    pub fn resolve(&mut self, state: GameState, action: &Action) -> (GameState, Resolution) {
        resolve(state, action, &mut self.rng)
    }

    /// Resolves a raw record. Records with no typed action are no-ops.
    pub fn resolve_record(
        &mut self,
        state: GameState,
        record: &ActionRecord,
    ) -> (GameState, Resolution) {
        match record.action() {
            Some(action) => self.resolve(state, &action),
            None => (
                state,
                Resolution::Rejected(Rejection::Unsupported { tag: record.tag }),
            ),
        }
    }

    /// One full turn: the player action, then the enemies.
    ///
    /// Enemies act even when the action was rejected or ignored.
    pub fn play_turn(&mut self, state: GameState, record: &ActionRecord) -> TurnOutcome {
        let (state, resolution) = self.resolve_record(state, record);
        let (state, enemies) = enemy_step(state);
        TurnOutcome {
            state,
            resolution,
            enemies,
        }
    }

    /// Draws taken from the engine stream so far.
    pub fn draws(&self) -> u64 {
        self.rng.draws()
    }
}
