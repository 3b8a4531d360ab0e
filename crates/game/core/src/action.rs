//! Player actions.
//!
//! [`ActionRecord`] is the raw form carried by the action text: an identity,
//! a numeric tag, the position the player claims to occupy, and a target.
//! [`Action`] is the typed form the engine resolves. Records with tags or
//! payloads the engine does not understand have no typed form and resolve as
//! no-ops.

use strum::FromRepr;

use crate::movement::MovementPattern;
use crate::state::{Identity, Position};

/// Numeric action tags as they appear on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ActionTag {
    Reset = 0,
    Move = 1,
    ChangePattern = 2,
    Ignore = 3,
}

/// A typed player action.
///
/// `Move` and `ChangePattern` carry the player position the client believed
/// current when it built the action; the engine drops them if it is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Reset,
    Move { player: Position, target: Position },
    ChangePattern { player: Position, pattern: MovementPattern },
    Ignore,
}

impl Action {
    pub const fn tag(&self) -> ActionTag {
        match self {
            Self::Reset => ActionTag::Reset,
            Self::Move { .. } => ActionTag::Move,
            Self::ChangePattern { .. } => ActionTag::ChangePattern,
            Self::Ignore => ActionTag::Ignore,
        }
    }

    /// Player position claimed by the action, if it carries one.
    pub const fn claimed_player(&self) -> Option<Position> {
        match self {
            Self::Move { player, .. } | Self::ChangePattern { player, .. } => Some(*player),
            Self::Reset | Self::Ignore => None,
        }
    }

    /// Wire form of this action for `identity`.
    ///
    /// `ChangePattern` stores the pattern index in `target.x`. Actions with no
    /// payload send zeroed positions.
    pub fn to_record(&self, identity: Identity) -> ActionRecord {
        let (player, target) = match *self {
            Self::Reset | Self::Ignore => (Position::ORIGIN, Position::ORIGIN),
            Self::Move { player, target } => (player, target),
            Self::ChangePattern { player, pattern } => (player, Position::new(pattern.index(), 0)),
        };
        ActionRecord {
            identity,
            tag: self.tag() as u32,
            player,
            target,
        }
    }
}

/// Raw action as carried by the action text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub identity: Identity,
    pub tag: u32,
    pub player: Position,
    pub target: Position,
}

impl ActionRecord {
    /// Typed action, or `None` for unknown tags and out-of-range pattern indices.
    pub fn action(&self) -> Option<Action> {
        let action = match ActionTag::from_repr(self.tag)? {
            ActionTag::Reset => Action::Reset,
            ActionTag::Move => Action::Move {
                player: self.player,
                target: self.target,
            },
            ActionTag::ChangePattern => Action::ChangePattern {
                player: self.player,
                pattern: MovementPattern::from_index(self.target.x)?,
            },
            ActionTag::Ignore => Action::Ignore,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> Identity {
        Identity::new("act").unwrap()
    }

    #[test]
    fn record_round_trips_typed_actions() {
        let actions = [
            Action::Reset,
            Action::Ignore,
            Action::Move {
                player: Position::new(1, 2),
                target: Position::new(2, 3),
            },
            Action::ChangePattern {
                player: Position::new(4, 4),
                pattern: MovementPattern::Knight,
            },
        ];
        for action in actions {
            assert_eq!(action.to_record(id()).action(), Some(action));
        }
    }

    #[test]
    fn unknown_tag_has_no_action() {
        let record = ActionRecord {
            identity: id(),
            tag: 0xdead_beef,
            player: Position::ORIGIN,
            target: Position::ORIGIN,
        };
        assert_eq!(record.action(), None);
    }

    #[test]
    fn out_of_range_pattern_has_no_action() {
        let record = ActionRecord {
            identity: id(),
            tag: ActionTag::ChangePattern as u32,
            player: Position::new(1, 1),
            target: Position::new(9, 0),
        };
        assert_eq!(record.action(), None);
    }

    #[test]
    fn claimed_player() {
        assert_eq!(Action::Reset.claimed_player(), None);
        let mv = Action::Move {
            player: Position::new(3, 3),
            target: Position::new(3, 4),
        };
        assert_eq!(mv.claimed_player(), Some(Position::new(3, 3)));
    }
}
