use arrayvec::ArrayVec;

use super::Position;
use crate::config::GameConfig;
use crate::state::StateError;

/// Anything on the board that has health: the player or an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub position: Position,
    pub health: i16,
}

impl Entity {
    pub const fn new(position: Position, health: i16) -> Self {
        Self { position, health }
    }

    pub const fn enemy(position: Position) -> Self {
        Self::new(position, GameConfig::ENEMY_HEALTH)
    }

    #[inline]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Takes one point of damage.
    pub fn hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn with_health(mut self, health: i16) -> Self {
        self.health = health;
        self
    }
}

/// Enemies on the board, bounded by [`GameConfig::MAX_ENEMIES`].
///
/// Storage order is the order enemies act in. Removal swaps the last enemy
/// into the vacated slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemies {
    slots: ArrayVec<Entity, { GameConfig::MAX_ENEMIES }>,
}

impl Enemies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, enemy: Entity) -> Result<(), StateError> {
        self.slots
            .try_push(enemy)
            .map_err(|_| StateError::EnemyListFull {
                max: GameConfig::MAX_ENEMIES,
            })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.slots
    }

    /// Index of the enemy standing on `position`, if any.
    pub fn index_at(&self, position: Position) -> Option<usize> {
        self.slots.iter().position(|e| e.position == position)
    }

    pub fn occupies(&self, position: Position) -> bool {
        self.index_at(position).is_some()
    }

    /// True if an enemy other than the one at `except` stands on `position`.
    pub fn occupies_other(&self, position: Position, except: usize) -> bool {
        self.slots
            .iter()
            .enumerate()
            .any(|(i, e)| i != except && e.position == position)
    }

    /// Deals one point of damage to the enemy at `index`, removing it if it dies.
    ///
    /// Returns `true` when the hit killed the enemy.
    pub fn strike(&mut self, index: usize) -> bool {
        let Some(enemy) = self.slots.get_mut(index) else {
            return false;
        };
        enemy.hit();
        if enemy.is_dead() {
            self.slots.swap_remove(index);
            true
        } else {
            false
        }
    }
}

/// Obstacle cells, bounded by [`GameConfig::MAX_OBSTACLES`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacles {
    cells: ArrayVec<Position, { GameConfig::MAX_OBSTACLES }>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: Position) -> Result<(), StateError> {
        self.cells
            .try_push(position)
            .map_err(|_| StateError::ObstacleListFull {
                max: GameConfig::MAX_OBSTACLES,
            })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}
