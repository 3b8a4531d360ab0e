//! Enemy turn.
//!
//! Enemies act one after another in storage order. Each one ranks its legal
//! destinations by [`Position::approach_score`] against the player, takes the
//! first lowest-scoring cell, and either strikes the player there or moves.

use crate::movement::legal_moves;
use crate::state::{GameState, Position};

/// Summary of one enemy turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyReport {
    /// Enemies that relocated.
    pub moved: u8,
    /// Hits landed on the player.
    pub attacks: u8,
    /// Enemies left in place with no destination.
    pub stuck: u8,
}

/// Runs one enemy turn.
///
/// Does nothing once the round is over. Enemies never die during this step,
/// so indices stay stable while iterating.
pub fn enemy_step(mut state: GameState) -> (GameState, EnemyReport) {
    let mut report = EnemyReport::default();
    let mut index = 0;
    while index < state.enemies.len() && !state.is_round_over() {
        act(&mut state, index, &mut report);
        index += 1;
    }
    (state, report)
}

/// Destination the enemy at `index` would pick, if it has one.
pub fn choose_destination(state: &GameState, index: usize) -> Option<Position> {
    let origin = state.enemies.get(index)?.position;
    let target = state.player.position;
    legal_moves(state, origin, state.pattern)
        .into_iter()
        .filter(|p| !state.enemies.occupies_other(*p, index))
        .min_by_key(|p| p.approach_score(target))
}

fn act(state: &mut GameState, index: usize, report: &mut EnemyReport) {
    let Some(destination) = choose_destination(state, index) else {
        report.stuck += 1;
        return;
    };

    if destination == state.player.position {
        state.player.hit();
        report.attacks += 1;
    } else if let Some(enemy) = state.enemies.get_mut(index) {
        enemy.position = destination;
        report.moved += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::MovementPattern;
    use crate::state::{Entity, Identity};

    fn board(player: Position) -> GameState {
        let mut state = GameState::empty(Identity::new("ai").unwrap());
        state.player = Entity::new(player, 5);
        state.door = Position::new(7, 0);
        state
    }

    #[test]
    fn adjacent_enemy_attacks_instead_of_moving() {
        let mut state = board(Position::new(3, 3));
        state.enemies.push(Entity::enemy(Position::new(2, 2))).unwrap();

        let (next, report) = enemy_step(state);
        assert_eq!(next.player.health, 4);
        assert_eq!(next.enemies.get(0).unwrap().position, Position::new(2, 2));
        assert_eq!(report.attacks, 1);
        assert_eq!(report.moved, 0);
    }

    #[test]
    fn enemy_closes_in() {
        let mut state = board(Position::new(5, 5));
        state.enemies.push(Entity::enemy(Position::new(0, 0))).unwrap();

        let (next, report) = enemy_step(state);
        assert_eq!(next.enemies.get(0).unwrap().position, Position::new(1, 1));
        assert_eq!(next.player.health, 5);
        assert_eq!(report.moved, 1);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        // Every king step from (5, 5) lies at or past the player on both
        // axes, so all score zero and the first generated cell wins.
        let mut state = board(Position::new(2, 2));
        state.enemies.push(Entity::enemy(Position::new(5, 5))).unwrap();

        let (next, _) = enemy_step(state);
        assert_eq!(next.enemies.get(0).unwrap().position, Position::new(4, 4));
    }

    #[test]
    fn enemies_do_not_stack() {
        let mut state = board(Position::new(4, 4));
        state.enemies.push(Entity::enemy(Position::new(2, 2))).unwrap();
        state.enemies.push(Entity::enemy(Position::new(3, 3))).unwrap();

        let (next, report) = enemy_step(state);
        let first = next.enemies.get(0).unwrap().position;
        assert_ne!(first, Position::new(3, 3));
        assert_eq!(first.approach_score(Position::new(4, 4)), 3);
        assert_eq!(next.enemies.get(1).unwrap().position, Position::new(3, 3));
        assert_eq!(report.attacks, 1);
        assert_eq!(next.player.health, 4);
    }

    #[test]
    fn boxed_in_enemy_stays() {
        let mut state = board(Position::new(7, 7));
        state.enemies.push(Entity::enemy(Position::ORIGIN)).unwrap();
        for cell in [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)] {
            state.obstacles.push(cell).unwrap();
        }

        let (next, report) = enemy_step(state);
        assert_eq!(next.enemies.get(0).unwrap().position, Position::ORIGIN);
        assert_eq!(report.stuck, 1);
    }

    #[test]
    fn enemies_follow_the_shared_pattern() {
        let mut state = board(Position::new(7, 7));
        state.pattern = MovementPattern::Knight;
        state.enemies.push(Entity::enemy(Position::ORIGIN)).unwrap();

        let (next, _) = enemy_step(state);
        // (1, 2) and (2, 1) tie; generation order picks (1, 2).
        assert_eq!(next.enemies.get(0).unwrap().position, Position::new(1, 2));
    }

    #[test]
    fn nothing_happens_after_the_round() {
        let state = board(Position::new(3, 3));
        let before = state.clone();
        let (next, report) = enemy_step(state);
        assert_eq!(next, before);
        assert_eq!(report, EnemyReport::default());
    }
}
