//! Dead-border invariant: no stone survives on the outer frame.

use super::Invariant;
use crate::Game;
use crate::rules::is_dead_border_clear;

/// Invariant: rows 1 and 20 and columns A and T are empty between moves.
pub struct DeadBorderClearInvariant;

impl Invariant<Game> for DeadBorderClearInvariant {
    fn holds(game: &Game) -> bool {
        is_dead_border_clear(game.board())
    }

    fn description() -> &'static str {
        "Dead border holds no stones"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(DeadBorderClearInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_border_stones_are_cleared_on_construction() {
        let mut board = Board::standard();
        board.set(Position::from_label("A1").unwrap(), Cell::Stone(Player::Black));
        let game = Game::from_board(board, Player::Black);
        assert!(DeadBorderClearInvariant::holds(&game));
    }
}
