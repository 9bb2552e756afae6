//! Core domain types for the board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// One of the eight winning index-triples.
pub type Line = [usize; 3];

/// Winning lines in canonical order: rows, then columns, then diagonals.
///
/// The evaluator reports the first matching line in this order, which fixes
/// the tie-break when more than one line is complete.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Rejected board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Index is outside 0-8.
    #[display("index {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// Target cell already holds a mark.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// The offending index.
        index: usize,
    },
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Marks the cell at `index` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is out of range or the cell is
    /// already occupied. This is the only mutation path.
    pub fn set(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        if index >= 9 {
            return Err(InvalidMove::OutOfRange { index });
        }
        if self.cells[index] != Cell::Empty {
            return Err(InvalidMove::Occupied { index });
        }
        self.cells[index] = Cell::Occupied(player);
        Ok(())
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
