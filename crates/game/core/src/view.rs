//! Read-only board queries for renderers.
//!
//! [`BoardView`] exposes what a presentation layer needs to draw a turn:
//! piece positions and every action the player can take next, each paired
//! with the action text that submits it.

use strum::IntoEnumIterator;

use crate::action::Action;
use crate::codec::encode_action;
use crate::config::GameConfig;
use crate::movement::{MovementPattern, legal_moves};
use crate::state::{Entity, GameState, Position};

/// What a move link does when followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Step,
    Attack,
}

/// A legal destination and the action text that moves there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveLink {
    pub target: Position,
    pub kind: MoveKind,
    pub link: String,
}

/// A pattern the player may switch to and the action text that does it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternLink {
    pub pattern: MovementPattern,
    pub link: String,
}

#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    state: &'a GameState,
}

impl<'a> BoardView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &'a GameState {
        self.state
    }

    pub fn player(&self) -> &'a Entity {
        &self.state.player
    }

    pub fn enemies(&self) -> &'a [Entity] {
        self.state.enemies.as_slice()
    }

    pub fn obstacles(&self) -> &'a [Position] {
        self.state.obstacles.as_slice()
    }

    pub fn door(&self) -> Position {
        self.state.door
    }

    pub fn pattern(&self) -> MovementPattern {
        self.state.pattern
    }

    fn link(&self, action: Action) -> String {
        encode_action(&action.to_record(self.state.identity))
    }

    /// Legal player moves in generation order.
    pub fn available_moves(&self) -> Vec<MoveLink> {
        let origin = self.state.player.position;
        legal_moves(self.state, origin, self.state.pattern)
            .into_iter()
            .map(|target| MoveLink {
                target,
                kind: if self.state.enemies.occupies(target) {
                    MoveKind::Attack
                } else {
                    MoveKind::Step
                },
                link: self.link(Action::Move {
                    player: origin,
                    target,
                }),
            })
            .collect()
    }

    /// One link per pattern other than the active one.
    pub fn pattern_links(&self) -> Vec<PatternLink> {
        MovementPattern::iter()
            .filter(|p| *p != self.state.pattern)
            .map(|pattern| PatternLink {
                pattern,
                link: self.link(Action::ChangePattern {
                    player: self.state.player.position,
                    pattern,
                }),
            })
            .collect()
    }

    pub fn reset_link(&self) -> String {
        self.link(Action::Reset)
    }

    /// Link that skips the player's action and lets the enemies move.
    pub fn wait_link(&self) -> String {
        self.link(Action::Ignore)
    }

    /// Plain text board, one row per line with `y = 0` on top.
    ///
    /// `@` player, `E` enemy, `#` obstacle, `D` door, `*` legal move target,
    /// `.` empty.
    pub fn render_ascii(&self) -> String {
        let side = GameConfig::GRID_SIZE as usize;
        let mut cells = [[b'.'; GameConfig::GRID_SIZE as usize]; GameConfig::GRID_SIZE as usize];
        let mut put = |p: Position, glyph: u8| {
            if p.is_valid() {
                cells[p.y as usize][p.x as usize] = glyph;
            }
        };

        for m in self.available_moves() {
            put(m.target, b'*');
        }
        put(self.state.door, b'D');
        for cell in self.obstacles() {
            put(*cell, b'#');
        }
        for enemy in self.enemies() {
            put(enemy.position, b'E');
        }
        put(self.state.player.position, b'@');

        let mut out = String::with_capacity(side * (side + 1));
        for row in cells {
            out.extend(row.iter().map(|b| *b as char));
            out.push('\n');
        }
        out
    }
}
