//! Fixed-size binary state record.
//!
//! Layout, little-endian, no padding and no length prefixes:
//!
//! | field            | type                                 |
//! |------------------|--------------------------------------|
//! | `level`          | `u8`                                 |
//! | `score`          | `u32`                                |
//! | `enemy_count`    | `u8`                                 |
//! | `obstacle_count` | `u8`                                 |
//! | `player`         | `x u8, y u8, health i16`             |
//! | `door`           | `x u8, y u8`                         |
//! | `enemies`        | `MAX_ENEMIES` entity slots           |
//! | `obstacles`      | `MAX_OBSTACLES` position slots       |
//! | `pattern`        | `u8`                                 |
//! | `identity`       | `IDENTITY_LEN` bytes, zero-padded    |
//!
//! Unused slots are written as zeros. The record goes through bincode's
//! legacy configuration (fixed-width integers, little-endian), under which
//! fixed arrays carry no length prefix, so every state encodes to exactly
//! [`STATE_RECORD_SIZE`] bytes.

use serde::{Deserialize, Serialize};

use super::DecodeError;
use crate::config::GameConfig;
use crate::movement::MovementPattern;
use crate::state::{Enemies, Entity, GameState, Identity, Obstacles, Position};

/// Encoded size of one state record in bytes.
pub const STATE_RECORD_SIZE: usize = 1 // level
    + 4 // score
    + 1 // enemy_count
    + 1 // obstacle_count
    + EntityRecord::SIZE // player
    + PositionRecord::SIZE // door
    + GameConfig::MAX_ENEMIES * EntityRecord::SIZE
    + GameConfig::MAX_OBSTACLES * PositionRecord::SIZE
    + 1 // pattern
    + GameConfig::IDENTITY_LEN;

// serde only implements fixed arrays up to 32 elements.
const _: () = assert!(GameConfig::MAX_OBSTACLES <= 32 && GameConfig::MAX_ENEMIES <= 32);

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
struct PositionRecord {
    x: u8,
    y: u8,
}

impl PositionRecord {
    const SIZE: usize = 2;
}

impl From<Position> for PositionRecord {
    fn from(p: Position) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PositionRecord> for Position {
    fn from(r: PositionRecord) -> Self {
        Position::new(r.x, r.y)
    }
}

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
struct EntityRecord {
    x: u8,
    y: u8,
    health: i16,
}

impl EntityRecord {
    const SIZE: usize = 4;
}

impl From<&Entity> for EntityRecord {
    fn from(e: &Entity) -> Self {
        Self {
            x: e.position.x,
            y: e.position.y,
            health: e.health,
        }
    }
}

impl From<EntityRecord> for Entity {
    fn from(r: EntityRecord) -> Self {
        Entity::new(Position::new(r.x, r.y), r.health)
    }
}

#[derive(Serialize, Deserialize)]
struct StateRecord {
    level: u8,
    score: u32,
    enemy_count: u8,
    obstacle_count: u8,
    player: EntityRecord,
    door: PositionRecord,
    enemies: [EntityRecord; GameConfig::MAX_ENEMIES],
    obstacles: [PositionRecord; GameConfig::MAX_OBSTACLES],
    pattern: u8,
    identity: [u8; GameConfig::IDENTITY_LEN],
}

impl From<&GameState> for StateRecord {
    fn from(state: &GameState) -> Self {
        let mut enemies = [EntityRecord::default(); GameConfig::MAX_ENEMIES];
        for (slot, enemy) in enemies.iter_mut().zip(state.enemies.iter()) {
            *slot = enemy.into();
        }
        let mut obstacles = [PositionRecord::default(); GameConfig::MAX_OBSTACLES];
        for (slot, cell) in obstacles.iter_mut().zip(state.obstacles.iter()) {
            *slot = (*cell).into();
        }

        Self {
            level: state.level,
            score: state.score,
            enemy_count: state.enemies.len() as u8,
            obstacle_count: state.obstacles.len() as u8,
            player: (&state.player).into(),
            door: state.door.into(),
            enemies,
            obstacles,
            pattern: state.pattern.index(),
            identity: state.identity.to_padded(),
        }
    }
}

impl TryFrom<StateRecord> for GameState {
    type Error = DecodeError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let enemy_count = checked_count("enemy", record.enemy_count, GameConfig::MAX_ENEMIES)?;
        let obstacle_count =
            checked_count("obstacle", record.obstacle_count, GameConfig::MAX_OBSTACLES)?;

        let player = Entity::from(record.player);
        check_bounds("player", player.position)?;
        let door = Position::from(record.door);
        check_bounds("door", door)?;

        let mut enemies = Enemies::new();
        for slot in &record.enemies[..enemy_count] {
            let enemy = Entity::from(*slot);
            check_bounds("enemy", enemy.position)?;
            if enemy.is_dead() {
                return Err(DecodeError::DeadEnemy {
                    position: enemy.position,
                    health: enemy.health,
                });
            }
            enemies.push(enemy).map_err(|_| DecodeError::CountOverflow {
                what: "enemy",
                count: enemy_count,
                max: GameConfig::MAX_ENEMIES,
            })?;
        }

        let mut obstacles = Obstacles::new();
        for slot in &record.obstacles[..obstacle_count] {
            let cell = Position::from(*slot);
            check_bounds("obstacle", cell)?;
            obstacles.push(cell).map_err(|_| DecodeError::CountOverflow {
                what: "obstacle",
                count: obstacle_count,
                max: GameConfig::MAX_OBSTACLES,
            })?;
        }

        let pattern = MovementPattern::from_index(record.pattern)
            .ok_or(DecodeError::UnknownPattern(record.pattern))?;
        let identity = Identity::from_padded(&record.identity)?;

        Ok(GameState {
            level: record.level,
            score: record.score,
            player,
            door,
            enemies,
            obstacles,
            pattern,
            identity,
        })
    }
}

fn checked_count(what: &'static str, count: u8, max: usize) -> Result<usize, DecodeError> {
    let count = count as usize;
    if count > max {
        return Err(DecodeError::CountOverflow { what, count, max });
    }
    Ok(count)
}

fn check_bounds(what: &'static str, position: Position) -> Result<(), DecodeError> {
    if position.is_valid() {
        Ok(())
    } else {
        Err(DecodeError::OutOfBounds { what, position })
    }
}

/// Encodes `state` into its fixed-size binary record.
pub fn encode_state(state: &GameState) -> Vec<u8> {
    bincode::serialize(&StateRecord::from(state))
        .expect("fixed-size state record serialization should not fail")
}

/// Decodes and validates a binary state record.
pub fn decode_state(bytes: &[u8]) -> Result<GameState, DecodeError> {
    if bytes.len() != STATE_RECORD_SIZE {
        return Err(DecodeError::RecordLength {
            expected: STATE_RECORD_SIZE,
            actual: bytes.len(),
        });
    }
    let record: StateRecord = bincode::deserialize(bytes)?;
    GameState::try_from(record)
}
