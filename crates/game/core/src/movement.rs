//! Move generation.
//!
//! A [`MovementPattern`] emits a fixed set of raw candidate cells around an
//! origin. [`legal_moves`] then keeps the ones inside the grid that are not
//! blocked by an obstacle. Cells holding the player or an enemy are kept on
//! purpose: deciding between attacking and moving is the caller's job.

use arrayvec::ArrayVec;
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::config::GameConfig;
use crate::state::{GameState, Position};

/// Candidate buffer sized for the largest pattern.
pub type Candidates = ArrayVec<Position, { GameConfig::MAX_CANDIDATES }>;

/// Geometric rule governing one-step moves of the player and every enemy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum MovementPattern {
    /// One step in any of the eight directions.
    #[default]
    King = 0,
    /// Chess knight jump.
    Knight = 1,
}

/// Knight offsets in generation order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl MovementPattern {
    pub const COUNT_U8: u8 = Self::COUNT as u8;

    /// Stable wire index of this pattern.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pattern for a wire index, `None` when out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Raw candidates around `origin` in generation order.
    ///
    /// Candidates are not filtered by the grid; ones that would leave the
    /// coordinate range are dropped instead of wrapping.
    pub fn raw_candidates(self, origin: Position) -> Candidates {
        match self {
            Self::King => king_candidates(origin),
            Self::Knight => knight_candidates(origin),
        }
    }
}

/// Column by column from `(x-1, y-1)` to `(x+1, y+1)`, skipping the origin.
fn king_candidates(origin: Position) -> Candidates {
    let mut out = Candidates::new();
    for dx in -1i8..=1 {
        for dy in -1i8..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(p) = origin.offset(dx, dy) {
                out.push(p);
            }
        }
    }
    out
}

fn knight_candidates(origin: Position) -> Candidates {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| origin.offset(dx, dy))
        .collect()
}

/// A cell a piece may step onto: inside the grid and not an obstacle.
pub fn is_playable(state: &GameState, position: Position) -> bool {
    position.is_valid() && !state.obstacles.contains(position)
}

/// Legal one-step destinations from `origin` under `pattern`.
///
/// Output keeps generation order, so equal inputs give equal sequences.
pub fn legal_moves(state: &GameState, origin: Position, pattern: MovementPattern) -> Candidates {
    pattern
        .raw_candidates(origin)
        .into_iter()
        .filter(|p| p.is_valid())
        .filter(|p| is_playable(state, *p))
        .collect()
}
