//! Ring-on-turn invariant: an unfinished game always has a ring to defend.

use super::Invariant;
use crate::Game;
use crate::rules::has_ring;

/// Invariant: while the game is unfinished, the side to move holds a ring.
///
/// A move that leaves the opponent ringless ends the game, and the closing
/// dead-border sweep never touches the opponent's stones, so this holds after
/// every accepted move. It is vacuous before the first move, since a custom
/// layout may start without rings. The mover itself may lose its ring to the
/// sweep.
pub struct RingOnTurnInvariant;

impl Invariant<Game> for RingOnTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.state().is_finished() || game.plies() == 0 || has_ring(game.board(), game.turn())
    }

    fn description() -> &'static str {
        "Unfinished games have a ring on the side to move"
    }
}
