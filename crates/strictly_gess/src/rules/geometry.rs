//! Move shape: which displacements a piece can make.

use crate::action::{Move, MoveError};
use crate::direction::Direction;
use crate::footprint::Footprint;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Furthest a piece with an empty centre may travel, per axis.
pub const MAX_SHORT_MOVE: i16 = 3;

/// Movement regime, chosen by the source footprint's centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MoveRegime {
    /// Empty centre: at most three cells.
    Short,
    /// Occupied centre: any unobstructed distance.
    Long,
}

/// A validated direction and step count for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Direction of travel.
    pub direction: Direction,
    /// Number of single-cell steps from source to destination.
    pub distance: u8,
    /// Short or long move.
    pub regime: MoveRegime,
}

/// Checks that `piece` can make `action`'s displacement and returns its trajectory.
///
/// The displacement must be a pure row/column move or an exact diagonal, the
/// piece must have a stone on the side facing that direction, and a piece
/// with an empty centre may move at most [`MAX_SHORT_MOVE`] rows and
/// [`MAX_SHORT_MOVE`] columns.
#[instrument]
pub fn classify(action: &Move, piece: &Footprint) -> Result<Trajectory, MoveError> {
    let illegal = || MoveError::IllegalGeometry {
        from: action.from,
        to: action.to,
    };

    let (drow, dcol) = action.displacement();
    let (direction, distance) = Direction::from_displacement(drow, dcol).ok_or_else(illegal)?;

    if piece.toward(direction).is_empty() {
        return Err(illegal());
    }

    let regime = if piece.center().is_empty() {
        MoveRegime::Short
    } else {
        MoveRegime::Long
    };

    // Rows and columns are bounded independently.
    if regime == MoveRegime::Short && (drow.abs() > MAX_SHORT_MOVE || dcol.abs() > MAX_SHORT_MOVE) {
        return Err(illegal());
    }

    Ok(Trajectory {
        direction,
        distance,
        regime,
    })
}
