//! State management errors.
//!
//! Errors related to capacity limits of the bounded entity collections.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur during game state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Enemy list is full (max capacity reached).
    #[error("Enemy list is full (max: {max})")]
    EnemyListFull {
        /// Maximum capacity.
        max: usize,
    },

    /// Obstacle list is full (max capacity reached).
    #[error("Obstacle list is full (max: {max})")]
    ObstacleListFull {
        /// Maximum capacity.
        max: usize,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        // Capacities are derived from the same constants that size the
        // collections, so overflowing one is always an engine bug.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EnemyListFull { .. } => "STATE_ENEMY_LIST_FULL",
            Self::ObstacleListFull { .. } => "STATE_OBSTACLE_LIST_FULL",
        }
    }
}
