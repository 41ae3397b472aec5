//! Core domain types for Gess.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Player {
    /// Black (moves first in the standard game, starts on rows 2-7).
    Black,
    /// White (starts on rows 14-19).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character symbol used in layout diagrams.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// A stone belonging to a player.
    Stone(Player),
}

impl Cell {
    /// Returns true if there is no stone in the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds a stone of `player`.
    pub fn is_stone_of(self, player: Player) -> bool {
        self == Cell::Stone(player)
    }

    /// Returns the owner of the stone, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    /// Layout diagram symbol: `.` for an empty cell, otherwise the owner's.
    pub fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }

    /// Parses a layout diagram symbol (`.`, `B` or `W`, case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '.' => Some(Cell::Empty),
            'B' => Some(Cell::Stone(Player::Black)),
            'W' => Some(Cell::Stone(Player::White)),
            _ => None,
        }
    }
}

/// Overall state of the game. Once it leaves `Unfinished` it never changes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Game is ongoing.
    #[default]
    Unfinished,
    /// Black destroyed White's last ring, or White resigned.
    BlackWon,
    /// White destroyed Black's last ring, or Black resigned.
    WhiteWon,
}

impl GameState {
    /// The terminal state in which `player` has won.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Black => GameState::BlackWon,
            Player::White => GameState::WhiteWon,
        }
    }

    /// Returns the winner if the game is over.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Unfinished => None,
            GameState::BlackWon => Some(Player::Black),
            GameState::WhiteWon => Some(Player::White),
        }
    }

    /// Returns true once the game has ended.
    pub fn is_finished(self) -> bool {
        self != GameState::Unfinished
    }
}
