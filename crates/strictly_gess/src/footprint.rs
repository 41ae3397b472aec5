//! The 3x3 footprint: the unit that moves across the board.

use crate::board::Board;
use crate::direction::Direction;
use crate::position::Position;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Offsets of the nine footprint cells: NW, N, NE, W, C, E, SW, S, SE.
pub const FOOTPRINT_OFFSETS: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const CENTER: usize = 4;

/// Contents of a 3x3 neighbourhood in `[NW, N, NE, W, C, E, SW, S, SE]` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    cells: [Cell; 9],
}

impl Footprint {
    /// A footprint with no stones; writing it clears a 3x3 block.
    pub const EMPTY: Footprint = Footprint {
        cells: [Cell::Empty; 9],
    };

    /// Builds a footprint from its nine cells.
    pub fn new(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Reads the neighbourhood centred on `center`. Cells off the grid read
    /// as empty.
    pub fn read(board: &Board, center: Position) -> Self {
        let cells = FOOTPRINT_OFFSETS.map(|(drow, dcol)| {
            center
                .offset(drow, dcol)
                .map_or(Cell::Empty, |pos| board.get(pos))
        });
        Self { cells }
    }

    /// Stamps this footprint onto the board centred on `center`.
    pub fn write(&self, board: &mut Board, center: Position) {
        for (&(drow, dcol), &cell) in FOOTPRINT_OFFSETS.iter().zip(&self.cells) {
            if let Some(pos) = center.offset(drow, dcol) {
                board.set(pos, cell);
            }
        }
    }

    /// All nine cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The centre cell.
    pub fn center(&self) -> Cell {
        self.cells[CENTER]
    }

    /// The cell on the side of the footprint facing `direction`.
    pub fn toward(&self, direction: Direction) -> Cell {
        let (drow, dcol) = direction.delta();
        let index = (drow + 1) as usize * 3 + (dcol + 1) as usize;
        self.cells[index]
    }

    /// The eight cells around the centre.
    pub fn surrounding(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != CENTER)
            .map(|(_, &cell)| cell)
    }

    /// True if any cell holds a stone of `player`.
    pub fn contains(&self, player: Player) -> bool {
        self.cells.iter().any(|cell| cell.is_stone_of(player))
    }

    /// Number of stones of `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|cell| cell.is_stone_of(player)).count()
    }

    /// True if only the centre is occupied.
    pub fn is_lone_center(&self) -> bool {
        !self.center().is_empty() && self.surrounding().all(Cell::is_empty)
    }

    /// True if the centre is empty and all eight neighbours are `player`'s.
    pub fn is_ring_of(&self, player: Player) -> bool {
        self.center().is_empty() && self.surrounding().all(|cell| cell.is_stone_of(player))
    }
}
