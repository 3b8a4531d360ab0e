//! Property-based tests for the engine and wire formats.

use proptest::prelude::*;

use game_core::engine::resolve;
use game_core::{
    Action, ActionRecord, BoardView, Entity, GameConfig, GameEngine, GameState, Identity,
    MovementPattern, Position, RngStream, decode_action, decode_state_hex, encode_action,
    encode_state_hex, legal_moves,
};
use strum::IntoEnumIterator;

fn identity() -> Identity {
    Identity::new("prop").unwrap()
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(state.positions().all(|p| p.is_valid()), "{state:?}");
    prop_assert!(state.enemies.len() <= GameConfig::MAX_ENEMIES);
    prop_assert!(state.obstacles.len() <= GameConfig::MAX_OBSTACLES);
    prop_assert!(state.pattern.index() < MovementPattern::COUNT_U8);
    prop_assert!(state.enemies.iter().all(|e| !e.is_dead()));
    Ok(())
}

/// Raw turn input: tag, whether to claim the real player position, and
/// coordinates that may fall outside the grid.
fn turn_input() -> impl Strategy<Value = (u32, bool, u8, u8, u8, u8)> {
    (0u32..6, any::<bool>(), 0u8..10, 0u8..10, 0u8..10, 0u8..10)
}

fn identity_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_turns_preserve_invariants(
        seed in any::<u64>(),
        turns in prop::collection::vec(turn_input(), 1..60),
    ) {
        let mut engine = GameEngine::new(seed);
        let mut state = engine.new_game(identity());
        check_invariants(&state)?;

        for (tag, fresh, px, py, tx, ty) in turns {
            let player = if fresh { state.player.position } else { Position::new(px, py) };
            let record = ActionRecord {
                identity: identity(),
                tag,
                player,
                target: Position::new(tx, ty),
            };
            state = engine.play_turn(state, &record).state;
            check_invariants(&state)?;
            prop_assert_eq!(decode_state_hex(&encode_state_hex(&state)).unwrap(), state.clone());
        }
    }

    #[test]
    fn following_links_keeps_pieces_apart(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 1..60),
    ) {
        let mut engine = GameEngine::new(seed);
        let mut state = engine.new_game(identity());

        for choice in choices {
            let view = BoardView::new(&state);
            let mut links: Vec<String> = view.available_moves().into_iter().map(|m| m.link).collect();
            links.extend(view.pattern_links().into_iter().map(|p| p.link));
            links.push(view.wait_link());
            let link = links[choice % links.len()].clone();

            let record = decode_action(&link).unwrap();
            state = engine.play_turn(state, &record).state;

            let mut cells: Vec<Position> = state.enemies.iter().map(|e| e.position).collect();
            cells.extend(state.obstacles.iter().copied());
            cells.push(state.player.position);
            let count = cells.len();
            cells.sort();
            cells.dedup();
            prop_assert_eq!(cells.len(), count, "overlapping pieces in {:?}", state);
        }
    }

    #[test]
    fn action_text_round_trips(
        name in identity_text(),
        tag in any::<u32>(),
        coords in any::<[u8; 4]>(),
    ) {
        let record = ActionRecord {
            identity: Identity::new(&name).unwrap(),
            tag,
            player: Position::new(coords[0], coords[1]),
            target: Position::new(coords[2], coords[3]),
        };
        let text = encode_action(&record);
        prop_assert_eq!(decode_action(&text).unwrap(), record);

        // Hex fields are case-insensitive; the identity is not.
        let (id_part, fields) = text.split_once(',').unwrap();
        let shouting = format!("{id_part},{}", fields.to_uppercase());
        prop_assert_eq!(decode_action(&shouting).unwrap(), record);
    }

    #[test]
    fn stale_actions_leave_state_untouched(
        seed in any::<u64>(),
        dx in 1u8..8,
        target in (0u8..8, 0u8..8),
        knight in any::<bool>(),
    ) {
        let state = GameEngine::new(seed).new_game(identity());
        let stale = Position::new((state.player.position.x + dx) % GameConfig::GRID_SIZE, state.player.position.y);
        let action = if knight {
            Action::ChangePattern { player: stale, pattern: MovementPattern::Knight }
        } else {
            Action::Move { player: stale, target: Position::new(target.0, target.1) }
        };
        let (next, _) = resolve(state.clone(), &action, &mut RngStream::new(seed));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn level_completion_scores_health(
        level in 0u8..60,
        score in 0u32..10_000,
        health in -5i16..200,
        seed in any::<u64>(),
    ) {
        let mut state = GameState::empty(identity());
        state.level = level;
        state.score = score;
        state.player = Entity::new(Position::new(4, 5), health);
        state.door = Position::new(4, 4);

        let action = Action::Move { player: Position::new(4, 5), target: Position::new(4, 4) };
        let (next, _) = resolve(state, &action, &mut RngStream::new(seed));
        prop_assert_eq!(next.level, level + 1);
        prop_assert_eq!(next.score, score + (health / 5).max(0) as u32);
        prop_assert_eq!(next.pattern, MovementPattern::King);
        prop_assert_eq!(next.enemies.len(), GameConfig::enemies_for_level(level + 1));
    }

    #[test]
    fn legal_moves_stay_on_playable_cells(
        seed in any::<u64>(),
        origin in (0u8..8, 0u8..8),
    ) {
        let state = GameEngine::new(seed).new_game(identity());
        let origin = Position::new(origin.0, origin.1);
        for pattern in MovementPattern::iter() {
            let moves = legal_moves(&state, origin, pattern);
            prop_assert_eq!(&moves, &legal_moves(&state, origin, pattern));
            prop_assert!(moves.iter().all(|p| p.is_valid() && !state.obstacles.contains(*p)));
            prop_assert!(!moves.contains(&origin));
        }
    }
}
