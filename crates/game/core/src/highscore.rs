//! Three-slot highscore table.
//!
//! Slots are ranked best first. A new entry takes the first slot whose score
//! it strictly beats (or the first free slot), pushing lower entries down one
//! rank; the last entry falls off.

use serde::{Deserialize, Serialize};

use crate::codec::DecodeError;
use crate::config::GameConfig;
use crate::state::{GameState, Identity};

/// Encoded size of a highscore table in bytes.
pub const HIGHSCORE_RECORD_SIZE: usize =
    GameConfig::HIGHSCORE_SLOTS * (4 + GameConfig::IDENTITY_LEN);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct HighscoreEntry {
    pub score: u32,
    pub identity: Identity,
}

impl HighscoreEntry {
    pub fn new(score: u32, identity: Identity) -> Self {
        Self { score, identity }
    }

    /// Entry for the final score of `state`.
    pub fn from_state(state: &GameState) -> Self {
        Self::new(state.score, state.identity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct HighscoreTable {
    slots: [Option<HighscoreEntry>; GameConfig::HIGHSCORE_SLOTS],
}

impl HighscoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry at `rank` (0 is best).
    pub fn get(&self, rank: usize) -> Option<&HighscoreEntry> {
        self.slots.get(rank)?.as_ref()
    }

    /// Occupied slots, best first.
    pub fn entries(&self) -> impl Iterator<Item = &HighscoreEntry> {
        self.slots.iter().flatten()
    }

    /// Rank `score` would take, if it qualifies.
    pub fn rank_for(&self, score: u32) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_none_or(|e| score > e.score))
    }

    /// Inserts `entry` and returns its rank, or `None` if it did not qualify.
    pub fn insert(&mut self, entry: HighscoreEntry) -> Option<usize> {
        let rank = self.rank_for(entry.score)?;
        self.slots[rank..].rotate_right(1);
        self.slots[rank] = Some(entry);
        Some(rank)
    }

    /// Encodes the table as a fixed-size record. Free slots are all zeros.
    pub fn encode(&self) -> Vec<u8> {
        let record = TableRecord {
            slots: self.slots.map(|slot| match slot {
                Some(e) => SlotRecord {
                    score: e.score,
                    identity: e.identity.to_padded(),
                },
                None => SlotRecord::default(),
            }),
        };
        bincode::serialize(&record)
            .expect("fixed-size highscore record serialization should not fail")
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != HIGHSCORE_RECORD_SIZE {
            return Err(DecodeError::RecordLength {
                expected: HIGHSCORE_RECORD_SIZE,
                actual: bytes.len(),
            });
        }
        let record: TableRecord = bincode::deserialize(bytes)?;

        let mut table = Self::new();
        for (slot, raw) in table.slots.iter_mut().zip(record.slots) {
            if raw.is_free() {
                continue;
            }
            *slot = Some(HighscoreEntry::new(
                raw.score,
                Identity::from_padded(&raw.identity)?,
            ));
        }
        Ok(table)
    }
}

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
struct SlotRecord {
    score: u32,
    identity: [u8; GameConfig::IDENTITY_LEN],
}

impl SlotRecord {
    fn is_free(&self) -> bool {
        self.score == 0 && self.identity.iter().all(|b| *b == 0)
    }
}

#[derive(Serialize, Deserialize)]
struct TableRecord {
    slots: [SlotRecord; GameConfig::HIGHSCORE_SLOTS],
}
