//! The Gess rules engine.

use crate::action::{Move, MoveError, MoveOutcome};
use crate::board::{Board, Snapshot};
use crate::config::{ConfigError, GameConfig};
use crate::contracts::LegalMove;
use crate::footprint::Footprint;
use crate::position::Position;
use crate::rules::{clear_dead_border, has_ring};
use crate::types::{GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};

/// Gess game engine.
///
/// Owns the board, whose turn it is and the game state. Every operation runs
/// to completion; a rejected move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Player,
    state: GameState,
    plies: u32,
}

impl Game {
    /// Creates a game with the standard layout, Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Player::Black)
    }

    /// Creates a game from an arbitrary position.
    ///
    /// Stones on the dead border are removed first.
    #[instrument(skip(board))]
    pub fn from_board(mut board: Board, first_turn: Player) -> Self {
        clear_dead_border(&mut board);
        Self {
            board,
            turn: first_turn,
            state: GameState::Unfinished,
            plies: 0,
        }
    }

    /// Creates a game from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = config.board()?;
        info!(first_turn = %config.first_turn(), "Starting game from config");
        Ok(Self::from_board(board, *config.first_turn()))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of accepted moves so far.
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Label-keyed dump of the board for renderers.
    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Parses a label into a legal piece centre (rows 2-19, columns B-S).
    #[instrument(skip(self))]
    pub fn resolve(&self, label: &str) -> Result<Position, MoveError> {
        let pos = self.board.label_to_position(label)?;
        if pos.is_interior() {
            Ok(pos)
        } else {
            Err(MoveError::MalformedCoordinate(label.to_string()))
        }
    }

    /// Attempts a move given the labels of the source and destination centres.
    ///
    /// Returns whether the move was accepted. Labels are case-insensitive.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like [`Game::make_move`], but reports why a move was rejected.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let result = self.parse_move(from, to).and_then(|action| self.play(action));
        if let Err(error) = &result {
            debug!(%error, from, to, "Move rejected");
        }
        result
    }

    fn parse_move(&self, from: &str, to: &str) -> Result<Move, MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameAlreadyOver(self.state));
        }
        Ok(Move::new(self.resolve(from)?, self.resolve(to)?))
    }

    /// Applies a move for the player to move.
    ///
    /// The move is committed tentatively: the source footprint is lifted and
    /// stamped onto the destination. If that leaves the mover without a
    /// ring, both footprints are restored and the move is rejected.
    /// Otherwise a missing opponent ring ends the game, and the dead border
    /// is cleared last.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let trajectory = LegalMove::check(&action, self)?;

        let mover = self.turn;
        let piece = Footprint::read(&self.board, action.from);
        let displaced = Footprint::read(&self.board, action.to);

        Footprint::EMPTY.write(&mut self.board, action.from);
        piece.write(&mut self.board, action.to);

        if !has_ring(&self.board, mover) {
            piece.write(&mut self.board, action.from);
            displaced.write(&mut self.board, action.to);
            return Err(MoveError::SelfRingDestruction(mover));
        }

        if !has_ring(&self.board, mover.opponent()) {
            self.state = GameState::won_by(mover);
            info!(winner = %mover, "Opponent's last ring destroyed");
        }

        // Rings are judged on the board as stamped, before the sweep.
        clear_dead_border(&mut self.board);
        self.turn = mover.opponent();
        self.plies += 1;

        #[cfg(debug_assertions)]
        {
            if let Err(error) = MoveContract::post(&before, self) {
                *self = before;
                return Err(error);
            }
        }

        let outcome = MoveOutcome {
            mover,
            action,
            regime: trajectory.regime,
            captured: displaced.count(mover.opponent()),
            state: self.state,
        };
        info!(
            %action,
            regime = %outcome.regime,
            captured = outcome.captured,
            state = %self.state,
            "Move accepted"
        );
        Ok(outcome)
    }

    /// The player to move concedes; the other player wins.
    ///
    /// The board and turn are left untouched. After the game has ended this
    /// does nothing and returns the final state.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn resign(&mut self) -> GameState {
        if !self.state.is_finished() {
            self.state = GameState::won_by(self.turn.opponent());
            info!(state = %self.state, "Player resigned");
        }
        self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn at(label: &str) -> Position {
        Position::from_label(label).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.state(), GameState::Unfinished);
        assert_eq!(game.plies(), 0);
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn test_resolve_interior_only() {
        let game = Game::new();
        assert_eq!(game.resolve("b2"), Ok(at("B2")));
        assert_eq!(game.resolve("S19"), Ok(at("S19")));
        for label in ["A5", "T5", "C1", "C20", "U5", "C21"] {
            assert_eq!(
                game.resolve(label),
                Err(MoveError::MalformedCoordinate(label.to_string()))
            );
        }
    }

    #[test]
    fn test_accepted_move_moves_piece() {
        let mut game = Game::new();
        let outcome = game.try_move("c3", "c5").unwrap();
        assert_eq!(outcome.mover, Player::Black);
        assert_eq!(outcome.regime, crate::rules::MoveRegime::Long);
        assert_eq!(outcome.captured, 0);
        assert_eq!(game.turn(), Player::White);
        assert_eq!(game.plies(), 1);
        assert_eq!(game.board().get(at("C6")), Cell::Stone(Player::Black));
        assert_eq!(game.board().get(at("C2")), Cell::Empty);
        // B3 was lifted with the piece and lands on B5.
        assert_eq!(game.board().get(at("B3")), Cell::Empty);
        assert_eq!(game.board().get(at("B5")), Cell::Stone(Player::Black));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move("c3", "c3"),
            Err(MoveError::IllegalGeometry { from: at("C3"), to: at("C3") })
        );
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.plies(), 0);
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn test_self_ring_destruction_reverts() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move("n3", "m3"),
            Err(MoveError::SelfRingDestruction(Player::Black))
        );
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.turn(), Player::Black);
    }

    #[test]
    fn test_resign() {
        let mut game = Game::new();
        assert_eq!(game.resign(), GameState::WhiteWon);
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.board(), &Board::standard());
        // Absorbing: a second resignation changes nothing.
        assert_eq!(game.resign(), GameState::WhiteWon);
        assert_eq!(
            game.try_move("c3", "c5"),
            Err(MoveError::GameAlreadyOver(GameState::WhiteWon))
        );
    }

    #[test]
    fn test_white_resigns() {
        let mut game = Game::new();
        assert!(game.make_move("c3", "c5"));
        assert_eq!(game.resign(), GameState::BlackWon);
    }

    #[test]
    fn test_move_onto_border_loses_stones() {
        let mut game = Game::new();
        // C3 -> B3: the piece's west column lands on column A and is cleared.
        assert!(game.make_move("c3", "b3"));
        assert_eq!(game.board().get(at("A3")), Cell::Empty);
        assert_eq!(game.board().stones(Player::Black), 42);
    }

    fn ring_board(black: &str, white: &str) -> Board {
        let mut board = Board::new();
        for (center, player) in [(black, Player::Black), (white, Player::White)] {
            let mut cells = [Cell::Stone(player); 9];
            cells[4] = Cell::Empty;
            Footprint::new(cells).write(&mut board, at(center));
        }
        board
    }

    #[test]
    fn test_ring_leaning_on_border_saves_move() {
        let mut game = Game::from_board(ring_board("C3", "R18"), Player::Black);
        // The ring steps north onto C2; its top row lands on row 1.
        let outcome = game.try_move("c3", "c2").unwrap();
        assert_eq!(outcome.regime, crate::rules::MoveRegime::Short);
        assert_eq!(game.state(), GameState::Unfinished);
        assert_eq!(game.turn(), Player::White);
        // Row 1 is cleared after the ring check, breaking the ring.
        for label in ["B1", "C1", "D1"] {
            assert_eq!(game.board().get(at(label)), Cell::Empty);
        }
        assert_eq!(game.board().stones(Player::Black), 5);
        assert!(!has_ring(game.board(), Player::Black));
    }

    #[test]
    fn test_play_rejects_border_centre() {
        let mut game = Game::new();
        let action = Move::new(at("B5"), at("A5"));
        assert_eq!(
            game.play(action),
            Err(MoveError::MalformedCoordinate("A5".to_string()))
        );
    }
}
