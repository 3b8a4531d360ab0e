//! Authoritative game state representation.
//!
//! This module owns the aggregate [`GameState`], the entity types it is built
//! from, and board initialization. Engine transitions consume a state and
//! return the next one; nothing mutates a shared instance.
mod error;
mod init;
pub mod types;

pub use error::StateError;
pub use init::InitParams;
pub use types::{Enemies, Entity, Identity, IdentityError, Obstacles, Position};

use crate::movement::MovementPattern;

/// Canonical snapshot of one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub level: u8,
    pub score: u32,
    pub player: Entity,
    /// Exit cell; reaching it with no enemies left completes the level.
    pub door: Position,
    pub enemies: Enemies,
    pub obstacles: Obstacles,
    /// Movement rule shared by the player and every enemy.
    pub pattern: MovementPattern,
    /// Persistence key of this session.
    pub identity: Identity,
}

impl GameState {
    /// Creates an empty board: player at the origin with level-0 health,
    /// door at the origin, no enemies or obstacles.
    ///
    /// Meant for scenario setup; regular games start from [`GameState::init`].
    pub fn empty(identity: Identity) -> Self {
        Self {
            level: 0,
            score: 0,
            player: Entity::new(
                Position::ORIGIN,
                crate::config::GameConfig::player_health_for_level(0),
            ),
            door: Position::ORIGIN,
            enemies: Enemies::new(),
            obstacles: Obstacles::new(),
            pattern: MovementPattern::default(),
            identity,
        }
    }

    /// The round is over once every enemy is gone.
    ///
    /// This is the narrow end-of-game check: enemies stop acting and a loaded
    /// state in this condition is discarded for a fresh game.
    #[inline]
    pub fn is_round_over(&self) -> bool {
        self.enemies.is_empty()
    }

    /// The round is over and the player stands on the door.
    #[inline]
    pub fn is_level_complete(&self) -> bool {
        self.is_round_over() && self.player.position == self.door
    }

    /// True if the player, an enemy or an obstacle occupies `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.player.position == position
            || self.enemies.occupies(position)
            || self.obstacles.contains(position)
    }

    /// Every position stored in the state: player, door, enemies, obstacles.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        [self.player.position, self.door]
            .into_iter()
            .chain(self.enemies.iter().map(|e| e.position))
            .chain(self.obstacles.iter().copied())
    }
}
