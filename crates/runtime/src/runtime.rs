//! Turn orchestration.
//!
//! One call handles one submitted action end to end: decode the action text,
//! load the player's state, resolve the action and the enemy turn, persist
//! the result. Three paths exist:
//!
//! - no saved state: a fresh level-0 game is dealt and the action is dropped
//! - saved state with no enemies left: the finished game's score is offered
//!   to the highscore table and a fresh level-0 game replaces it
//! - otherwise: the action and the enemy turn are resolved

use game_core::{
    ActionRecord, EnemyReport, GameEngine, GameState, HighscoreEntry, Identity, Resolution,
    decode_action, decode_state_hex, encode_state_hex,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::repository::{HighscoreRepository, StateRepository};

/// How the turn was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnKind {
    /// Nothing was saved for the identity; a new game was dealt.
    NewGame,
    /// The saved game was finished and has been replaced by a new one.
    Restarted {
        final_score: u32,
        highscore_rank: Option<usize>,
    },
    /// The action and the enemy turn were resolved.
    Played {
        resolution: Resolution,
        enemies: EnemyReport,
    },
}

/// Result of one runtime turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub state: GameState,
    pub kind: TurnKind,
}

impl TurnReport {
    /// Hex text of the resulting state.
    pub fn state_hex(&self) -> String {
        encode_state_hex(&self.state)
    }
}

/// Synchronous runtime over a state repository and a highscore repository.
pub struct Runtime<S, H> {
    config: RuntimeConfig,
    states: S,
    highscores: H,
}

impl<S: StateRepository, H: HighscoreRepository> Runtime<S, H> {
    pub fn new(config: RuntimeConfig, states: S, highscores: H) -> Self {
        Self {
            config,
            states,
            highscores,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn states(&self) -> &S {
        &self.states
    }

    pub fn highscores(&self) -> &H {
        &self.highscores
    }

    fn engine(&self) -> GameEngine {
        GameEngine::new(self.config.turn_seed())
    }

    /// Plays one turn from action text.
    pub fn play(&self, action_text: &str) -> Result<TurnReport> {
        let record = decode_action(action_text)?;
        self.advance(&record)
    }

    /// Plays one turn for a decoded action and saves the result.
    pub fn advance(&self, record: &ActionRecord) -> Result<TurnReport> {
        let mut engine = self.engine();

        let report = match self.states.load(record.identity)? {
            None => {
                tracing::info!("No saved game for {}; dealing a new one", record.identity);
                TurnReport {
                    state: engine.new_game(record.identity),
                    kind: TurnKind::NewGame,
                }
            }
            Some(state) => self.step(&mut engine, state, record)?,
        };

        self.states.save(&report.state)?;
        Ok(report)
    }

    /// Plays one turn against a state carried as hex text, without touching
    /// the state repository.
    ///
    /// Empty text stands for "no saved state". Finished games still feed the
    /// highscore table.
    pub fn advance_encoded(&self, state_hex: &str, action_text: &str) -> Result<TurnReport> {
        let record = decode_action(action_text)?;
        let mut engine = self.engine();

        let state_hex = state_hex.trim();
        if state_hex.is_empty() {
            tracing::info!("No state text for {}; dealing a new game", record.identity);
            return Ok(TurnReport {
                state: engine.new_game(record.identity),
                kind: TurnKind::NewGame,
            });
        }

        let state = decode_state_hex(state_hex)?;
        self.step(&mut engine, state, &record)
    }

    /// Shared path once a state is in hand.
    fn step(
        &self,
        engine: &mut GameEngine,
        state: GameState,
        record: &ActionRecord,
    ) -> Result<TurnReport> {
        if state.identity != record.identity {
            return Err(RuntimeError::IdentityMismatch {
                action: record.identity,
                state: state.identity,
            });
        }
        if state.is_round_over() {
            return self.restart(engine, state);
        }

        let level = state.level;
        let outcome = engine.play_turn(state, record);
        log_resolution(record.identity, level, &outcome.resolution);
        if outcome.enemies.attacks > 0 {
            tracing::debug!(
                "Enemies hit {} {} time(s); health now {}",
                record.identity,
                outcome.enemies.attacks,
                outcome.state.player.health
            );
        }

        Ok(TurnReport {
            state: outcome.state,
            kind: TurnKind::Played {
                resolution: outcome.resolution,
                enemies: outcome.enemies,
            },
        })
    }

    fn restart(&self, engine: &mut GameEngine, finished: GameState) -> Result<TurnReport> {
        let entry = HighscoreEntry::from_state(&finished);
        let highscore_rank = self.highscores.record(entry)?;

        tracing::warn!(
            "Game for {} had no enemies left at level {} (score {}); starting over",
            finished.identity,
            finished.level,
            finished.score
        );
        if let Some(rank) = highscore_rank {
            tracing::info!("{} placed #{} on the highscore table", finished.identity, rank + 1);
        }

        Ok(TurnReport {
            state: engine.new_game(finished.identity),
            kind: TurnKind::Restarted {
                final_score: finished.score,
                highscore_rank,
            },
        })
    }
}

fn log_resolution(identity: Identity, level: u8, resolution: &Resolution) {
    match resolution {
        Resolution::Reset => tracing::info!("{} reset their game", identity),
        Resolution::LevelComplete { level: next, score } => tracing::info!(
            "{} cleared level {}; now on level {} with score {}",
            identity,
            level,
            next,
            score
        ),
        Resolution::Rejected(rejection) => {
            tracing::debug!("Dropped action from {}: {:?}", identity, rejection)
        }
        Resolution::Ignored => tracing::debug!("{} passed their turn", identity),
        other => tracing::debug!("{}: {:?}", identity, other),
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Action, Entity, Position};

    use super::*;
    use crate::repository::{InMemoryHighscoreRepo, InMemoryStateRepo};

    fn runtime() -> Runtime<InMemoryStateRepo, InMemoryHighscoreRepo> {
        Runtime::new(
            RuntimeConfig::default().with_seed(21),
            InMemoryStateRepo::new(),
            InMemoryHighscoreRepo::new(),
        )
    }

    fn id() -> Identity {
        Identity::new("dave").unwrap()
    }

    #[test]
    fn first_turn_deals_a_game() {
        let rt = runtime();
        let report = rt.play("dave,00000001,00,00,00,01").unwrap();
        assert_eq!(report.kind, TurnKind::NewGame);
        assert_eq!(report.state.level, 0);
        assert_eq!(rt.states().load(id()).unwrap(), Some(report.state));
    }

    #[test]
    fn finished_game_restarts_and_records_highscore() {
        let rt = runtime();
        let mut finished = GameState::empty(id());
        finished.level = 6;
        finished.score = 14;
        finished.player = Entity::new(Position::new(2, 2), 9);
        finished.door = Position::new(5, 5);
        rt.states().save(&finished).unwrap();

        let report = rt.advance(&Action::Ignore.to_record(id())).unwrap();
        assert_eq!(
            report.kind,
            TurnKind::Restarted {
                final_score: 14,
                highscore_rank: Some(0)
            }
        );
        assert_eq!(report.state.level, 0);
        assert_eq!(report.state.score, 0);
        assert_eq!(rt.highscores().load().unwrap().get(0).unwrap().score, 14);
    }

    #[test]
    fn foreign_action_cannot_play_encoded_state() {
        let rt = runtime();
        let alice = GameEngine::new(4).new_game(Identity::new("alice").unwrap());
        let hex = encode_state_hex(&alice);
        let text = game_core::encode_action(
            &Action::Move {
                player: alice.player.position,
                target: alice.door,
            }
            .to_record(id()),
        );

        assert!(matches!(
            rt.advance_encoded(&hex, &text),
            Err(RuntimeError::IdentityMismatch { action, state })
                if action == id() && state == alice.identity
        ));
    }

    #[test]
    fn decode_errors_propagate() {
        let rt = runtime();
        assert!(matches!(
            rt.play("dave,1,2"),
            Err(crate::RuntimeError::Decode(_))
        ));
        assert!(matches!(
            rt.advance_encoded("abcd", "dave,00000003,00,00,00,00"),
            Err(crate::RuntimeError::Decode(_))
        ));
        assert!(!rt.states().exists(id()));
    }
}
