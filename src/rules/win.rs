//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in scan order.
///
/// Rows top to bottom, then columns left to right, then the
/// `0-4-8` diagonal before `2-4-6`.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and which squares it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    mark: Mark,
    line: [Position; 3],
}

impl WinResult {
    /// The winning mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The three squares of the winning line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are checked in [`LINES`] order and the first hit is returned.
/// Boards with more than one completed line cannot come out of normal
/// play, but the result for them is still deterministic.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    for line @ [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Occupied(mark) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(WinResult { mark, line });
        }
    }

    None
}
