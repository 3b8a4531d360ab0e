//! Error types raised by repository implementations.

use game_core::{DecodeError, Identity};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted record `{key}`: {source}")]
    CorruptedData {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error("record `{key}` belongs to {found}, not {expected}")]
    IdentityMismatch {
        key: String,
        expected: Identity,
        found: Identity,
    },
}

impl RepositoryError {
    pub(crate) fn corrupted(key: impl Into<String>, source: DecodeError) -> Self {
        Self::CorruptedData {
            key: key.into(),
            source,
        }
    }
}
