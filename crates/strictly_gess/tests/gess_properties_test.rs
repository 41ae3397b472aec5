//! Property tests over random move sequences.

use proptest::prelude::*;
use strictly_gess::rules::{has_ring, is_dead_border_clear};
use strictly_gess::{Game, GameState, Position};

fn interior() -> impl Strategy<Value = Position> {
    (2u8..=19, 1u8..=18).prop_map(|(row, col)| Position::new(row, col).unwrap())
}

fn moves() -> impl Strategy<Value = Vec<(Position, Position)>> {
    prop::collection::vec((interior(), interior()), 1..60)
}

proptest! {
    #[test]
    fn label_round_trips(row in 1u8..=20, col in 0u8..20, lower in any::<bool>()) {
        let pos = Position::new(row, col).unwrap();
        let label = pos.label();
        let input = if lower { label.to_lowercase() } else { label.clone() };
        let parsed = Position::from_label(&input).unwrap();
        prop_assert_eq!(parsed, pos);
        prop_assert_eq!(parsed.label(), label);
    }

    #[test]
    fn rejected_moves_are_no_ops(sequence in moves()) {
        let mut game = Game::new();
        for (from, to) in sequence {
            let before = game.clone();
            if game.try_move(&from.label(), &to.label()).is_err() {
                prop_assert_eq!(&game, &before);
            }
        }
    }

    #[test]
    fn accepted_moves_clear_border_and_judge_rings_first(sequence in moves()) {
        let mut game = Game::new();
        for (from, to) in sequence {
            let mover = game.turn();
            let stones_before = game.board().stones(mover);
            if let Ok(outcome) = game.try_move(&from.label(), &to.label()) {
                prop_assert!(is_dead_border_clear(game.board()));
                // The mover held a ring at the ring check; only the border
                // sweep that follows can take it away.
                if !has_ring(game.board(), mover) {
                    prop_assert!(game.board().stones(mover) < stones_before);
                }
                prop_assert_eq!(game.turn(), mover.opponent());
                prop_assert_eq!(outcome.state, game.state());
                let opponent_ring = has_ring(game.board(), mover.opponent());
                prop_assert_eq!(opponent_ring, game.state() == GameState::Unfinished);
            }
        }
    }

    #[test]
    fn finished_games_are_absorbing(sequence in moves()) {
        let mut game = Game::new();
        game.resign();
        let finished = game.clone();
        for (from, to) in sequence {
            prop_assert!(!game.make_move(&from.label(), &to.label()));
        }
        prop_assert_eq!(game, finished);
    }
}
