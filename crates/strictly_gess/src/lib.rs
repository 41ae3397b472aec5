//! Strictly Gess - a type-safe Gess rules engine
//!
//! Gess is played with Go stones on a 20x20 grid, but the pieces are not
//! the stones: any 3x3 block of cells whose centre lies in the interior can
//! move as a unit, in any direction marked by one of its outer stones.
//! Moving a piece captures whatever its destination footprint covered.
//! A player loses when their last ring (eight own stones around an empty
//! centre) is destroyed.
//!
//! # Architecture
//!
//! - **Board**: cell storage, layout diagrams and label lookup
//! - **Rules**: pure functions (legal start, geometry, path, ring, border)
//! - **Contracts**: preconditions and postconditions composed from the rules
//! - **Game**: the engine owning board, turn and state
//!
//! # Example
//!
//! ```
//! use strictly_gess::{Game, GameState, Player};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("c3", "c5"));
//! assert_eq!(game.turn(), Player::White);
//! assert_eq!(game.state(), GameState::Unfinished);
//!
//! // Rejected moves leave the game untouched.
//! assert!(!game.make_move("c3", "c3"));
//! assert_eq!(game.turn(), Player::White);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod direction;
mod footprint;
mod game;
mod position;
mod types;

// Public rule and validation layers
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use game::Game;

// Crate-level exports - Board and coordinates
pub use board::{Board, LayoutError, Snapshot};
pub use position::{COLS, Position, ROWS};
pub use types::{Cell, GameState, Player};

// Crate-level exports - Pieces and moves
pub use action::{Move, MoveError, MoveOutcome};
pub use direction::Direction;
pub use footprint::{FOOTPRINT_OFFSETS, Footprint};
pub use rules::{MoveRegime, Trajectory};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Validation
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{GessInvariants, Invariant, InvariantSet, InvariantViolation};
