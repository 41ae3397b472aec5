//! Board storage: the 20x20 grid of cells and the label mapping.
//!
//! The board is pure storage. It never decides whether a change is a legal
//! game move; every rule lives in [`crate::rules`].

use crate::action::MoveError;
use crate::position::{COLS, Position, ROWS};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Standard opening layout, row 1 at the top.
const STANDARD_LAYOUT: [&str; ROWS as usize] = [
    "....................",
    "..B.B.BBBBBBBB.B.B..",
    ".BBB.B.BBBB.B.B.BBB.",
    "..B.B.BBBBBBBB.B.B..",
    "....................",
    "....................",
    "..B..B..B..B..B..B..",
    "....................",
    "....................",
    "....................",
    "....................",
    "....................",
    "....................",
    "..W..W..W..W..W..W..",
    "....................",
    "....................",
    "..W.W.WWWWWWWW.W.W..",
    ".WWW.W.WWWW.W.W.WWW.",
    "..W.W.WWWWWWWW.W.W..",
    "....................",
];

/// Label-keyed dump of every cell, `"A1"` through `"T20"`.
pub type Snapshot = BTreeMap<String, Cell>;

/// Error raised while reading a layout diagram.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LayoutError {
    /// The diagram does not have exactly 20 rows.
    #[display("Layout has {} rows, expected {}", _0, ROWS)]
    WrongRowCount(usize),

    /// A row does not have exactly 20 cells.
    #[display("Layout row {} has {} cells, expected {}", row, len, COLS)]
    WrongRowLength {
        /// Row number (1-based).
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// A cell symbol other than `.`, `B` or `W`.
    #[display("Unknown symbol {:?} at row {}, column {}", symbol, row, col)]
    UnknownSymbol {
        /// Row number (1-based).
        row: usize,
        /// Column index (0-based).
        col: usize,
        /// The offending character.
        symbol: char,
    },
}

impl std::error::Error for LayoutError {}

/// The 20x20 Gess grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order; `cells[row - 1][col]`.
    cells: [[Cell; COLS as usize]; ROWS as usize],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS as usize]; ROWS as usize],
        }
    }

    /// Creates a board with the standard opening layout.
    #[instrument]
    pub fn standard() -> Self {
        let mut board = Self::new();
        for (r, line) in STANDARD_LAYOUT.iter().enumerate() {
            for (c, symbol) in line.chars().enumerate() {
                if let Some(cell) = Cell::from_symbol(symbol) {
                    board.cells[r][c] = cell;
                }
            }
        }
        board
    }

    /// Reads a layout diagram: 20 lines of 20 symbols (`.`, `B`, `W`).
    ///
    /// Blank lines are skipped, and surrounding whitespace and a leading row
    /// number on each line are ignored, so a diagram can be annotated:
    ///
    /// ```text
    ///  1 ....................
    ///  2 ..B.B.BBBBBBBB.B.B..
    /// ```
    #[instrument(skip(diagram))]
    pub fn from_diagram(diagram: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = diagram
            .lines()
            .map(|line| line.trim().trim_start_matches(|c: char| c.is_ascii_digit()).trim())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != ROWS as usize {
            return Err(LayoutError::WrongRowCount(lines.len()));
        }

        let mut board = Self::new();
        for (r, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != COLS as usize {
                return Err(LayoutError::WrongRowLength { row: r + 1, len });
            }
            for (c, symbol) in line.chars().enumerate() {
                board.cells[r][c] = Cell::from_symbol(symbol).ok_or(LayoutError::UnknownSymbol {
                    row: r + 1,
                    col: c,
                    symbol,
                })?;
            }
        }
        Ok(board)
    }

    /// Returns the contents of a cell.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[usize::from(pos.row() - 1)][usize::from(pos.col())]
    }

    /// Overwrites a cell.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[usize::from(pos.row() - 1)][usize::from(pos.col())] = cell;
    }

    /// Converts a label such as `"C7"` to a grid position.
    ///
    /// Accepts the whole grid (`A1`-`T20`); the playable-interior
    /// restriction is applied by the rules engine.
    #[instrument(skip(self))]
    pub fn label_to_position(&self, label: &str) -> Result<Position, MoveError> {
        Position::from_label(label)
    }

    /// Label-keyed dump of the whole board, computed from the grid on demand.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Position::all()
            .map(|pos| (pos.label(), self.get(pos)))
            .collect()
    }

    /// Counts the stones belonging to `player`.
    pub fn stones(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_stone_of(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Writes the board as a layout diagram, row 1 first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
