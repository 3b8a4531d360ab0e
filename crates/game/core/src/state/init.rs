//! Board initialization.
//!
//! Pieces are placed in a fixed order (player, obstacles, enemies, door), each
//! on a distinct random cell chosen by rejection sampling.

use super::{Enemies, Entity, GameState, Identity, Obstacles, Position};
use crate::config::GameConfig;
use crate::env::{RngOracle, RngStream};
use crate::movement::MovementPattern;

/// Parameters for a fresh board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitParams {
    pub level: u8,
    pub score: u32,
    /// `None` resets the movement pattern to its default.
    pub pattern: Option<MovementPattern>,
    pub identity: Identity,
}

impl InitParams {
    /// Level 0, score 0, default pattern.
    pub fn new_game(identity: Identity) -> Self {
        Self {
            level: 0,
            score: 0,
            pattern: None,
            identity,
        }
    }

    /// Next level after `state`, keeping identity and the given score.
    pub fn next_level(state: &GameState, score: u32) -> Self {
        Self {
            level: state.level.saturating_add(1),
            score,
            pattern: None,
            identity: state.identity,
        }
    }
}

/// Draws unoccupied cells, remembering every cell already handed out.
struct Placement<'r, R> {
    taken: [bool; GameConfig::CELL_COUNT],
    rng: &'r mut RngStream<R>,
}

impl<'r, R: RngOracle> Placement<'r, R> {
    /// Sampling attempts before falling back to a scan.
    const MAX_ATTEMPTS: usize = GameConfig::CELL_COUNT * 4;

    fn new(rng: &'r mut RngStream<R>) -> Self {
        Self {
            taken: [false; GameConfig::CELL_COUNT],
            rng,
        }
    }

    /// Claims a random free cell.
    ///
    /// Falls back to the first free cell in row-major order if sampling keeps
    /// hitting occupied cells. The config guarantees a free cell exists.
    fn claim(&mut self) -> Position {
        let side = GameConfig::GRID_SIZE as u32;
        let sampled = (0..Self::MAX_ATTEMPTS)
            .map(|_| Position::new(self.rng.below(side) as u8, self.rng.below(side) as u8))
            .find(|p| !self.taken[p.index()]);

        let position = sampled
            .or_else(|| Position::all().find(|p| !self.taken[p.index()]))
            .unwrap_or(Position::ORIGIN);
        self.taken[position.index()] = true;
        position
    }
}

impl GameState {
    /// Builds a fresh board for `params`, drawing placements from `rng`.
    pub fn init<R: RngOracle>(params: InitParams, rng: &mut RngStream<R>) -> Self {
        let mut placement = Placement::new(rng);

        let player = Entity::new(
            placement.claim(),
            GameConfig::player_health_for_level(params.level),
        );

        let mut obstacles = Obstacles::new();
        for _ in 0..GameConfig::obstacles_for_level(params.level) {
            if obstacles.push(placement.claim()).is_err() {
                break;
            }
        }

        let mut enemies = Enemies::new();
        for _ in 0..GameConfig::enemies_for_level(params.level) {
            if enemies.push(Entity::enemy(placement.claim())).is_err() {
                break;
            }
        }

        let door = placement.claim();

        Self {
            level: params.level,
            score: params.score,
            player,
            door,
            enemies,
            obstacles,
            pattern: params.pattern.unwrap_or_default(),
            identity: params.identity,
        }
    }
}
