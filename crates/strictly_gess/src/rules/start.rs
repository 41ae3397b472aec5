//! Which footprints a player may pick up.

use crate::action::MoveError;
use crate::footprint::Footprint;
use crate::position::Position;
use crate::types::Player;
use tracing::instrument;

/// Checks that `piece` (centred on `from`) is a piece `player` may move.
///
/// A movable piece holds at least one of the player's stones, none of the
/// opponent's, and is not a single stone sitting alone in the centre.
#[instrument]
pub fn check_legal_start(piece: &Footprint, player: Player, from: Position) -> Result<(), MoveError> {
    let illegal = MoveError::IllegalStart { player, from };

    if piece.contains(player.opponent()) || !piece.contains(player) {
        return Err(illegal);
    }
    if piece.is_lone_center() {
        return Err(illegal);
    }
    Ok(())
}
