//! First-class move and outcome types for Gess.
//!
//! A move names the centres of the source and destination footprints; who
//! is moving is always the engine's current turn.

use crate::position::Position;
use crate::rules::MoveRegime;
use crate::types::{GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A proposed move: pick up the piece centred on `from`, put it down on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Centre of the source footprint.
    pub from: Position,
    /// Centre of the destination footprint.
    pub to: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Row and column displacement from source to destination.
    pub fn displacement(&self) -> (i16, i16) {
        (
            i16::from(self.to.row()) - i16::from(self.from.row()),
            i16::from(self.to.col()) - i16::from(self.from.col()),
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player who moved.
    pub mover: Player,
    /// The move that was applied.
    pub action: Move,
    /// Short (empty centre) or long (occupied centre) move.
    pub regime: MoveRegime,
    /// Opponent stones overwritten by the destination footprint.
    pub captured: usize,
    /// Game state after the move.
    pub state: GameState,
}

/// Why a move was rejected.
///
/// Every rejection leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A label could not be parsed, or is not a legal piece centre.
    #[display("Malformed coordinate {:?}", _0)]
    MalformedCoordinate(String),

    /// The source footprint is not a piece the player may move.
    #[display("{} cannot move the piece at {}", player, from)]
    IllegalStart {
        /// Player whose turn it is.
        player: Player,
        /// Centre of the rejected source footprint.
        from: Position,
    },

    /// The displacement is not a move this piece can make.
    #[display("Piece cannot move from {} to {}", from, to)]
    IllegalGeometry {
        /// Source centre.
        from: Position,
        /// Destination centre.
        to: Position,
    },

    /// A stone blocks the path before the destination.
    #[display("Path is blocked by the stone at {}", _0)]
    Obstructed(Position),

    /// The move would leave the mover without a ring.
    #[display("Move would destroy {}'s last ring", _0)]
    SelfRingDestruction(Player),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameAlreadyOver(GameState),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement() {
        let mv = Move::new(
            Position::from_label("H3").unwrap(),
            Position::from_label("E6").unwrap(),
        );
        assert_eq!(mv.displacement(), (3, -3));
        assert_eq!(mv.to_string(), "H3 -> E6");
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::SelfRingDestruction(Player::Black);
        assert_eq!(err.to_string(), "Move would destroy BLACK's last ring");
        let err = MoveError::GameAlreadyOver(GameState::WhiteWon);
        assert!(err.to_string().contains("WHITE_WON"));
    }
}
