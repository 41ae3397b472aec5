//! Ring detection: the win condition of Gess.

use crate::board::Board;
use crate::footprint::Footprint;
use crate::position::Position;
use crate::types::Player;
use tracing::instrument;

/// Finds the first ring of `player`, scanning piece centres in row-major order.
///
/// A ring is an empty cell whose eight neighbours are all `player`'s stones.
#[instrument(skip(board))]
pub fn find_ring(board: &Board, player: Player) -> Option<Position> {
    Position::interior()
        .filter(|&pos| board.get(pos).is_empty())
        .find(|&pos| Footprint::read(board, pos).is_ring_of(player))
}

/// True if `player` has at least one ring on the board.
#[instrument(skip(board))]
pub fn has_ring(board: &Board, player: Player) -> bool {
    find_ring(board, player).is_some()
}
