//! The eight compass directions a piece can travel in.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A compass direction. North is towards row 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Direction {
    /// Up and to the left.
    NorthWest,
    /// Up.
    North,
    /// Up and to the right.
    NorthEast,
    /// Left.
    West,
    /// Right.
    East,
    /// Down and to the left.
    SouthWest,
    /// Down.
    South,
    /// Down and to the right.
    SouthEast,
}

// Cells a footprint newly covers after advancing one step, relative to its
// new centre. Three for cardinal directions, five for diagonals.
const NORTH_EDGE: [(i8, i8); 3] = [(-1, -1), (-1, 0), (-1, 1)];
const SOUTH_EDGE: [(i8, i8); 3] = [(1, -1), (1, 0), (1, 1)];
const WEST_EDGE: [(i8, i8); 3] = [(-1, -1), (0, -1), (1, -1)];
const EAST_EDGE: [(i8, i8); 3] = [(-1, 1), (0, 1), (1, 1)];
const NORTH_WEST_EDGE: [(i8, i8); 5] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (1, -1)];
const NORTH_EAST_EDGE: [(i8, i8); 5] = [(-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)];
const SOUTH_WEST_EDGE: [(i8, i8); 5] = [(1, -1), (1, 0), (1, 1), (0, -1), (-1, -1)];
const SOUTH_EAST_EDGE: [(i8, i8); 5] = [(1, -1), (1, 0), (1, 1), (0, 1), (-1, 1)];

impl Direction {
    /// Unit step as `(drow, dcol)`.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Leading-edge offsets, relative to the advanced centre.
    pub fn leading_edge(self) -> &'static [(i8, i8)] {
        match self {
            Direction::NorthWest => &NORTH_WEST_EDGE,
            Direction::North => &NORTH_EDGE,
            Direction::NorthEast => &NORTH_EAST_EDGE,
            Direction::West => &WEST_EDGE,
            Direction::East => &EAST_EDGE,
            Direction::SouthWest => &SOUTH_WEST_EDGE,
            Direction::South => &SOUTH_EDGE,
            Direction::SouthEast => &SOUTH_EAST_EDGE,
        }
    }

    /// True for the four diagonal directions.
    pub fn is_diagonal(self) -> bool {
        let (drow, dcol) = self.delta();
        drow != 0 && dcol != 0
    }

    /// Splits a displacement into a direction and a step count.
    ///
    /// Returns `None` for a zero displacement or one that is neither a pure
    /// row/column move nor an exact diagonal.
    #[instrument]
    pub fn from_displacement(drow: i16, dcol: i16) -> Option<(Self, u8)> {
        if drow != 0 && dcol != 0 && drow.abs() != dcol.abs() {
            return None;
        }
        let direction = match (drow.signum(), dcol.signum()) {
            (-1, -1) => Direction::NorthWest,
            (-1, 0) => Direction::North,
            (-1, 1) => Direction::NorthEast,
            (0, -1) => Direction::West,
            (0, 1) => Direction::East,
            (1, -1) => Direction::SouthWest,
            (1, 0) => Direction::South,
            (1, 1) => Direction::SouthEast,
            _ => return None,
        };
        let distance = u8::try_from(drow.abs().max(dcol.abs())).ok()?;
        Some((direction, distance))
    }
}
