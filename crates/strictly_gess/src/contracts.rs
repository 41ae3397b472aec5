//! Contract-based validation for Gess moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`. The
//! preconditions are the rules of the game; the postconditions are the
//! invariants every accepted move must preserve.

use crate::Game;
use crate::action::{Move, MoveError};
use crate::footprint::Footprint;
use crate::invariants::{GessInvariants, InvariantSet};
use crate::rules::{self, Trajectory};
use crate::types::Player;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameUnfinished;

impl GameUnfinished {
    /// Fails with [`MoveError::GameAlreadyOver`] once a winner is known.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.state().is_finished() {
            Err(MoveError::GameAlreadyOver(game.state()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: both centres lie in the playable interior.
pub struct InteriorCenters;

impl InteriorCenters {
    /// Fails with [`MoveError::MalformedCoordinate`] for a centre on or next
    /// to the dead border's outside edge.
    #[instrument]
    pub fn check(action: &Move) -> Result<(), MoveError> {
        for pos in [action.from, action.to] {
            if !pos.is_interior() {
                return Err(MoveError::MalformedCoordinate(pos.label()));
            }
        }
        Ok(())
    }
}

/// Precondition: the source footprint is a piece the player to move owns.
pub struct LegalStart;

impl LegalStart {
    /// Checks the source footprint against the player to move.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &Game) -> Result<Footprint, MoveError> {
        let piece = Footprint::read(game.board(), action.from);
        rules::check_legal_start(&piece, game.turn(), action.from)?;
        Ok(piece)
    }
}

/// Precondition: the piece can make this displacement over a clear path.
pub struct LegalPath;

impl LegalPath {
    /// Classifies the move and sweeps its path.
    #[instrument(skip(game))]
    pub fn check(action: &Move, piece: &Footprint, game: &Game) -> Result<Trajectory, MoveError> {
        let trajectory = rules::classify(action, piece)?;
        rules::check_clear_path(game.board(), action.from, &trajectory)?;
        Ok(trajectory)
    }
}

/// Composite precondition: everything that can be decided before the board
/// is touched.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, returning its trajectory.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &Game) -> Result<Trajectory, MoveError> {
        GameUnfinished::check(game)?;
        InteriorCenters::check(action)?;
        let piece = LegalStart::check(action, game)?;
        LegalPath::check(action, &piece, game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game unfinished, centres in the interior
/// - Source is the mover's piece
/// - Legal shape over an unobstructed path
///
/// Postconditions:
/// - All [`GessInvariants`] hold
/// - No player gained stones
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).map(|_| ())
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        GessInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        for player in [Player::Black, Player::White] {
            let was = before.board().stones(player);
            let now = after.board().stones(player);
            if now > was {
                warn!(%player, was, now, "Stones multiplied");
                return Err(MoveError::InvariantViolation(format!(
                    "{} went from {} to {} stones",
                    player, was, now
                )));
            }
        }
        Ok(())
    }
}
