//! Grid coordinates and their `<letter><row>` labels.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of rows on the board (labelled 1-20).
pub const ROWS: u8 = 20;

/// Number of columns on the board (labelled A-T).
pub const COLS: u8 = 20;

/// A cell on the 20x20 grid.
///
/// Rows are 1-based (1-20, top to bottom), columns are 0-based (0-19,
/// labelled `A`-`T`). A `Position` can only be built inside the grid, so
/// board accessors never need a bounds check. Deserialization goes through
/// the same check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
            .ok_or_else(|| format!("position off the grid: row {}, col {}", raw.row, raw.col))
    }
}

impl Position {
    /// Creates a position, or `None` if it lies off the grid.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        ((1..=ROWS).contains(&row) && col < COLS).then_some(Self { row, col })
    }

    /// Row number (1-20).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-19).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Column letter (`A`-`T`).
    pub fn column_letter(self) -> char {
        char::from(b'A' + self.col)
    }

    /// Canonical upper-case label, e.g. `"C7"`.
    pub fn label(self) -> String {
        format!("{}{}", self.column_letter(), self.row)
    }

    /// Parses a label such as `"c7"` or `"T20"` (case-insensitive).
    pub fn from_label(label: &str) -> Result<Self, MoveError> {
        let malformed = || MoveError::MalformedCoordinate(label.to_string());

        let trimmed = label.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
        if !('A'..='T').contains(&letter) {
            return Err(malformed());
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let row: u8 = digits.parse().map_err(|_| malformed())?;

        Self::new(row, letter as u8 - b'A').ok_or_else(malformed)
    }

    /// Returns the position shifted by `(drow, dcol)`, if still on the grid.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + i16::from(drow)).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(dcol)).ok()?;
        Self::new(row, col)
    }

    /// True if a piece may be centred here (rows 2-19, columns B-S).
    ///
    /// Every interior position has its full 3x3 neighbourhood on the grid.
    pub fn is_interior(self) -> bool {
        (2..ROWS).contains(&self.row) && (1..COLS - 1).contains(&self.col)
    }

    /// True for the outer frame (rows 1 and 20, columns A and T).
    pub fn is_dead_border(self) -> bool {
        self.row == 1 || self.row == ROWS || self.col == 0 || self.col == COLS - 1
    }

    /// Every position on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=ROWS).flat_map(|row| (0..COLS).map(move |col| Position { row, col }))
    }

    /// Every valid piece centre in row-major order.
    pub fn interior() -> impl Iterator<Item = Position> {
        Self::all().filter(|pos| pos.is_interior())
    }

    /// Every dead-border position.
    pub fn dead_border() -> impl Iterator<Item = Position> {
        Self::all().filter(|pos| pos.is_dead_border())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

impl FromStr for Position {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
