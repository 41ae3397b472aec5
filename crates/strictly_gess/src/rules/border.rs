//! Dead-border cleanup.

use crate::board::Board;
use crate::position::Position;
use crate::types::Cell;
use tracing::{debug, instrument};

/// Removes every stone from rows 1 and 20 and columns A and T.
///
/// Returns the number of stones removed.
#[instrument(skip(board))]
pub fn clear_dead_border(board: &mut Board) -> usize {
    let mut removed = 0;
    for pos in Position::dead_border() {
        if !board.get(pos).is_empty() {
            board.set(pos, Cell::Empty);
            removed += 1;
        }
    }
    if removed > 0 {
        debug!(removed, "Cleared stones from the dead border");
    }
    removed
}

/// True if no stone sits on the dead border.
#[instrument(skip(board))]
pub fn is_dead_border_clear(board: &Board) -> bool {
    Position::dead_border().all(|pos| board.get(pos).is_empty())
}
