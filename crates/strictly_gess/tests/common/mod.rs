//! Shared helpers for integration tests.

use strictly_gess::{Game, Position};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber (`RUST_LOG` controls verbosity).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses a label that the test knows to be valid.
#[allow(dead_code)]
pub fn at(label: &str) -> Position {
    Position::from_label(label).unwrap()
}

/// Plays a sequence of moves, asserting each one is accepted.
#[allow(dead_code)]
pub fn play_all(game: &mut Game, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        if let Err(error) = game.try_move(from, to) {
            panic!("{} -> {} should be accepted: {}", from, to, error);
        }
    }
}
