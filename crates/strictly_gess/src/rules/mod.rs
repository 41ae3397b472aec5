//! Game rules for Gess.
//!
//! This module contains pure functions for evaluating board positions
//! according to Gess rules. Rules are separated from board storage and from
//! the engine's turn/state bookkeeping so they can be composed into the
//! contract layer.

pub mod border;
pub mod geometry;
pub mod path;
pub mod ring;
pub mod start;

pub use border::{clear_dead_border, is_dead_border_clear};
pub use geometry::{MAX_SHORT_MOVE, MoveRegime, Trajectory, classify};
pub use path::{check_clear_path, first_obstruction};
pub use ring::{find_ring, has_ring};
pub use start::check_legal_start;
