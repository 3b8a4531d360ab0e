//! Unified error types surfaced by the runtime.
//!
//! Wraps failures from decoding transport text and from repositories so
//! callers can bubble them up with consistent context.

use game_core::{DecodeError, ErrorSeverity, GameError, Identity};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to decode input: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("action from {action} cannot be played on the game of {state}")]
    IdentityMismatch { action: Identity, state: Identity },
}

impl RuntimeError {
    /// Severity for logging and exit codes.
    ///
    /// Decode failures and foreign actions are the caller's fault;
    /// repository failures are not recoverable within the invocation.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Decode(e) => e.severity(),
            Self::IdentityMismatch { .. } => ErrorSeverity::Validation,
            Self::Repository(_) => ErrorSeverity::Internal,
        }
    }
}
