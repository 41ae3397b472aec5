//! Obstruction checking along a piece's path.
//!
//! A piece advances one cell at a time. Before each step short of the
//! destination, the cells its footprint would newly cover (the leading edge)
//! must be empty. The destination footprint itself is not checked: stones
//! there are captured.

use super::geometry::Trajectory;
use crate::action::MoveError;
use crate::board::Board;
use crate::position::Position;
use tracing::instrument;

/// Returns the first stone blocking a piece centred on `from`, if any.
#[instrument(skip(board))]
pub fn first_obstruction(board: &Board, from: Position, trajectory: &Trajectory) -> Option<Position> {
    let (drow, dcol) = trajectory.direction.delta();
    let edge = trajectory.direction.leading_edge();

    (1..trajectory.distance).find_map(|step| {
        let step = step as i8;
        let center = from.offset(drow * step, dcol * step)?;
        edge.iter()
            .filter_map(|&(r, c)| center.offset(r, c))
            .find(|&pos| !board.get(pos).is_empty())
    })
}

/// Fails with [`MoveError::Obstructed`] if anything blocks the path.
#[instrument(skip(board))]
pub fn check_clear_path(board: &Board, from: Position, trajectory: &Trajectory) -> Result<(), MoveError> {
    match first_obstruction(board, from, trajectory) {
        Some(pos) => Err(MoveError::Obstructed(pos)),
        None => Ok(()),
    }
}
