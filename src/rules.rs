//! Win and draw evaluation.

use crate::board::{Board, Cell, Line, Player, LINES};

/// Result of evaluating a board for the player who just moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game continues.
    NoResult,
    /// `player` completed this line.
    Win(Line),
    /// Board is full with no line completed.
    Draw,
}

/// Evaluates the board for `player`.
///
/// Scans the eight winning lines in canonical order (rows, columns,
/// diagonals) and reports the first one fully held by `player`. Must be
/// called after the candidate mark is placed, for the player who placed it.
pub fn evaluate(board: &Board, player: Player) -> Outcome {
    let mark = Cell::Occupied(player);
    for line in LINES {
        if line.iter().all(|&i| board.get(i) == Some(mark)) {
            return Outcome::Win(line);
        }
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::NoResult
}
