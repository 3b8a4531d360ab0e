//! Action resolution.
//!
//! One handler per [`Action`] variant. Every handler consumes the current
//! state and returns the next one together with a [`Resolution`] describing
//! what happened. Rejected actions return the state untouched.

use crate::action::Action;
use crate::config::GameConfig;
use crate::env::{RngOracle, RngStream};
use crate::movement::MovementPattern;
use crate::state::{GameState, InitParams, Position};

/// Why an action was dropped without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The action was built against a different player position.
    StalePlayerPosition { claimed: Position, actual: Position },
    /// Move target outside the grid.
    TargetOutOfBounds { target: Position },
    /// Tag or payload the engine does not understand.
    Unsupported { tag: u32 },
}

/// Outcome of resolving one player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// A fresh level-0 game replaced the previous one.
    Reset,
    /// The player stepped onto an empty cell.
    Moved { to: Position },
    /// The player hit the enemy at `target`; on a kill the player advanced there.
    Attacked { target: Position, killed: bool },
    /// The move finished the level; a new board for `level` was dealt.
    LevelComplete { level: u8, score: u32 },
    /// The movement pattern changed; `paid` is true when it cost one health.
    PatternChanged { pattern: MovementPattern, paid: bool },
    Ignored,
    Rejected(Rejection),
}

/// Resolves `action` against `state`.
pub fn resolve<R: RngOracle>(
    state: GameState,
    action: &Action,
    rng: &mut RngStream<R>,
) -> (GameState, Resolution) {
    match *action {
        Action::Reset => reset(state, rng),
        Action::Move { player, target } => move_player(state, player, target, rng),
        Action::ChangePattern { player, pattern } => change_pattern(state, player, pattern),
        Action::Ignore => (state, Resolution::Ignored),
    }
}

fn reset<R: RngOracle>(state: GameState, rng: &mut RngStream<R>) -> (GameState, Resolution) {
    let fresh = GameState::init(InitParams::new_game(state.identity), rng);
    (fresh, Resolution::Reset)
}

/// Drops actions whose claimed player position is stale.
fn check_claim(state: &GameState, claimed: Position) -> Result<(), Rejection> {
    if claimed == state.player.position {
        Ok(())
    } else {
        Err(Rejection::StalePlayerPosition {
            claimed,
            actual: state.player.position,
        })
    }
}

fn move_player<R: RngOracle>(
    mut state: GameState,
    claimed: Position,
    target: Position,
    rng: &mut RngStream<R>,
) -> (GameState, Resolution) {
    if let Err(rejection) = check_claim(&state, claimed) {
        return (state, Resolution::Rejected(rejection));
    }
    if !target.is_valid() {
        return (
            state,
            Resolution::Rejected(Rejection::TargetOutOfBounds { target }),
        );
    }

    let resolution = match state.enemies.index_at(target) {
        Some(index) => {
            let killed = state.enemies.strike(index);
            if killed {
                state.player.position = target;
            }
            Resolution::Attacked { target, killed }
        }
        None => {
            state.player.position = target;
            Resolution::Moved { to: target }
        }
    };

    if state.is_level_complete() {
        return complete_level(state, rng);
    }
    (state, resolution)
}

/// Converts leftover health into score and deals the next level.
fn complete_level<R: RngOracle>(
    state: GameState,
    rng: &mut RngStream<R>,
) -> (GameState, Resolution) {
    let bonus = (state.player.health / GameConfig::HEALTH_PER_SCORE_POINT).max(0) as u32;
    let score = state.score.saturating_add(bonus);
    let next = GameState::init(InitParams::next_level(&state, score), rng);
    let resolution = Resolution::LevelComplete {
        level: next.level,
        score,
    };
    (next, resolution)
}

fn change_pattern(
    mut state: GameState,
    claimed: Position,
    pattern: MovementPattern,
) -> (GameState, Resolution) {
    if let Err(rejection) = check_claim(&state, claimed) {
        return (state, Resolution::Rejected(rejection));
    }

    state.pattern = pattern;
    let paid = !state.is_round_over();
    if paid {
        state.player.hit();
    }
    (state, Resolution::PatternChanged { pattern, paid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Entity, Identity};

    fn board() -> GameState {
        let mut state = GameState::empty(Identity::new("resolver").unwrap());
        state.player = Entity::new(Position::new(3, 3), 5);
        state.door = Position::new(7, 7);
        state
    }

    fn rng() -> RngStream {
        RngStream::new(11)
    }

    fn mv(player: Position, target: Position) -> Action {
        Action::Move { player, target }
    }

    #[test]
    fn plain_move() {
        let mut state = board();
        state.enemies.push(Entity::enemy(Position::new(0, 0))).unwrap();
        let (next, res) = resolve(state, &mv(Position::new(3, 3), Position::new(3, 4)), &mut rng());
        assert_eq!(next.player.position, Position::new(3, 4));
        assert_eq!(res, Resolution::Moved { to: Position::new(3, 4) });
    }

    #[test]
    fn attack_without_kill_stays_put() {
        let mut state = board();
        state.enemies.push(Entity::enemy(Position::new(3, 4))).unwrap();
        let (next, res) = resolve(state, &mv(Position::new(3, 3), Position::new(3, 4)), &mut rng());
        assert_eq!(next.player.position, Position::new(3, 3));
        assert_eq!(next.enemies.get(0).unwrap().health, 1);
        assert_eq!(
            res,
            Resolution::Attacked {
                target: Position::new(3, 4),
                killed: false
            }
        );
    }

    #[test]
    fn attack_and_advance() {
        let mut state = board();
        state
            .enemies
            .push(Entity::enemy(Position::new(4, 4)).with_health(1))
            .unwrap();
        state.enemies.push(Entity::enemy(Position::new(0, 7))).unwrap();
        let (next, res) = resolve(state, &mv(Position::new(3, 3), Position::new(4, 4)), &mut rng());
        assert_eq!(next.player.position, Position::new(4, 4));
        assert_eq!(next.enemies.len(), 1);
        assert!(!next.enemies.occupies(Position::new(4, 4)));
        assert_eq!(
            res,
            Resolution::Attacked {
                target: Position::new(4, 4),
                killed: true
            }
        );
    }

    #[test]
    fn stale_actions_change_nothing() {
        let mut state = board();
        state.enemies.push(Entity::enemy(Position::new(3, 4))).unwrap();
        let before = state.clone();

        let (next, res) = resolve(
            state.clone(),
            &mv(Position::new(2, 2), Position::new(3, 4)),
            &mut rng(),
        );
        assert_eq!(next, before);
        assert!(matches!(
            res,
            Resolution::Rejected(Rejection::StalePlayerPosition { .. })
        ));

        let (next, _) = resolve(
            state,
            &Action::ChangePattern {
                player: Position::new(0, 0),
                pattern: MovementPattern::Knight,
            },
            &mut rng(),
        );
        assert_eq!(next, before);
    }

    #[test]
    fn out_of_bounds_target_is_rejected() {
        let state = board();
        let before = state.clone();
        let (next, res) = resolve(state, &mv(Position::new(3, 3), Position::new(8, 3)), &mut rng());
        assert_eq!(next, before);
        assert_eq!(
            res,
            Resolution::Rejected(Rejection::TargetOutOfBounds {
                target: Position::new(8, 3)
            })
        );
    }

    #[test]
    fn reaching_the_door_completes_the_level() {
        let mut state = board();
        state.level = 4;
        state.score = 10;
        state.player = Entity::new(Position::new(6, 7), 7);
        state.pattern = MovementPattern::Knight;

        let (next, res) = resolve(state, &mv(Position::new(6, 7), Position::new(7, 7)), &mut rng());
        assert_eq!(next.level, 5);
        assert_eq!(next.score, 11);
        assert_eq!(next.pattern, MovementPattern::King);
        assert_eq!(next.player.health, 8);
        assert_eq!(next.enemies.len(), GameConfig::enemies_for_level(5));
        assert_eq!(next.identity.as_str(), "resolver");
        assert_eq!(res, Resolution::LevelComplete { level: 5, score: 11 });
    }

    #[test]
    fn low_health_adds_no_score() {
        let mut state = board();
        state.score = 3;
        state.player = Entity::new(Position::new(7, 6), 4);
        let (next, _) = resolve(state, &mv(Position::new(7, 6), Position::new(7, 7)), &mut rng());
        assert_eq!(next.level, 1);
        assert_eq!(next.score, 3);
    }

    #[test]
    fn killing_last_enemy_on_the_door_completes_the_level() {
        let mut state = board();
        state.player = Entity::new(Position::new(6, 6), 10);
        state
            .enemies
            .push(Entity::enemy(Position::new(7, 7)).with_health(1))
            .unwrap();
        let (next, res) = resolve(state, &mv(Position::new(6, 6), Position::new(7, 7)), &mut rng());
        assert_eq!(next.level, 1);
        assert_eq!(next.score, 2);
        assert_eq!(res, Resolution::LevelComplete { level: 1, score: 2 });
    }

    #[test]
    fn changing_pattern_costs_health_mid_round() {
        let mut state = board();
        state.enemies.push(Entity::enemy(Position::new(0, 0))).unwrap();
        let action = Action::ChangePattern {
            player: Position::new(3, 3),
            pattern: MovementPattern::Knight,
        };
        let (next, res) = resolve(state, &action, &mut rng());
        assert_eq!(next.pattern, MovementPattern::Knight);
        assert_eq!(next.player.health, 4);
        assert_eq!(
            res,
            Resolution::PatternChanged {
                pattern: MovementPattern::Knight,
                paid: true
            }
        );
    }

    #[test]
    fn changing_pattern_is_free_after_the_round() {
        let state = board();
        let action = Action::ChangePattern {
            player: Position::new(3, 3),
            pattern: MovementPattern::Knight,
        };
        let (next, _) = resolve(state, &action, &mut rng());
        assert_eq!(next.pattern, MovementPattern::Knight);
        assert_eq!(next.player.health, 5);
    }

    #[test]
    fn reset_and_ignore() {
        let mut state = board();
        state.level = 3;
        state.score = 9;
        let (next, res) = resolve(state.clone(), &Action::Ignore, &mut rng());
        assert_eq!(next, state);
        assert_eq!(res, Resolution::Ignored);

        let (next, res) = resolve(state, &Action::Reset, &mut rng());
        assert_eq!(res, Resolution::Reset);
        assert_eq!(next.level, 0);
        assert_eq!(next.score, 0);
        assert_eq!(next.identity.as_str(), "resolver");
        assert_eq!(next.enemies.len(), GameConfig::enemies_for_level(0));
    }
}
