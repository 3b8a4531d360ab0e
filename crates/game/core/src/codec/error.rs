//! Decoding errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{IdentityError, Position};

/// Errors raised while decoding hex text, action text or a binary record.
///
/// Decoding never falls back to a default state; callers must propagate these.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("record is {actual} bytes (expected {expected})")]
    RecordLength { expected: usize, actual: usize },

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("{what} count {count} exceeds capacity {max}")]
    CountOverflow {
        what: &'static str,
        count: usize,
        max: usize,
    },

    #[error("{what} at {position} lies outside the grid")]
    OutOfBounds {
        what: &'static str,
        position: Position,
    },

    #[error("enemy at {position} has no health left ({health})")]
    DeadEnemy { position: Position, health: i16 },

    #[error("unknown movement pattern index {0}")]
    UnknownPattern(u8),

    #[error("invalid identity: {0}")]
    Identity(#[from] IdentityError),

    #[error("hex text is {actual} characters (expected {expected})")]
    TextLength { expected: usize, actual: usize },

    #[error("invalid hex text: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("action text has {actual} fields (expected {expected})")]
    FieldCount { expected: usize, actual: usize },

    #[error("action field `{field}` is malformed: {value:?}")]
    ActionField { field: &'static str, value: String },
}

impl GameError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RecordLength { .. } => "DECODE_RECORD_LENGTH",
            Self::Malformed(_) => "DECODE_MALFORMED",
            Self::CountOverflow { .. } => "DECODE_COUNT_OVERFLOW",
            Self::OutOfBounds { .. } => "DECODE_OUT_OF_BOUNDS",
            Self::DeadEnemy { .. } => "DECODE_DEAD_ENEMY",
            Self::UnknownPattern(_) => "DECODE_UNKNOWN_PATTERN",
            Self::Identity(_) => "DECODE_IDENTITY",
            Self::TextLength { .. } => "DECODE_TEXT_LENGTH",
            Self::Hex(_) => "DECODE_HEX",
            Self::FieldCount { .. } => "DECODE_FIELD_COUNT",
            Self::ActionField { .. } => "DECODE_ACTION_FIELD",
        }
    }
}

impl From<bincode::Error> for DecodeError {
    fn from(err: bincode::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
