//! Core domain types for tic-tac-toe.

use crate::{Position, TimelineError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (moves on even move numbers).
    #[display("X")]
    X,
    /// Player O (moves on odd move numbers).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark whose turn it is at history index `mv`.
    ///
    /// Even moves belong to X, odd moves to O.
    pub fn for_move(mv: usize) -> Self {
        if mv % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single square's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square taken by a player.
    Occupied(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Placing a mark returns a new board and leaves
/// the original untouched, so snapshots kept in a history never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells.
    ///
    /// No consistency checks: the result may hold any mix of marks,
    /// including several completed lines.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[must_use]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::Occupied(mark);
        next
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Empty squares in index order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl std::fmt::Display for Board {
    /// Three rows separated by `-+-+-`; empty squares show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = TimelineError;

    /// Parses nine cells: `X`/`O` (any case) for marks, `.`, `_`, `-` or a
    /// digit for empty. Whitespace and `|` are skipped, as are `-+-+-`
    /// separator lines, so `Display` output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        let data = s
            .lines()
            .filter(|line| !is_separator(line))
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace() && *c != '|');

        for ch in data {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' | '1'..='9' => Cell::Empty,
                other => {
                    return Err(TimelineError::InvalidBoard(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            if count == 9 {
                return Err(TimelineError::InvalidBoard("more than 9 cells".to_string()));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != 9 {
            return Err(TimelineError::InvalidBoard(format!(
                "expected 9 cells, found {}",
                count
            )));
        }
        Ok(Self { cells })
    }
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.contains('+') && line.chars().all(|c| c == '-' || c == '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(8), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.marks_placed(), 1);
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_display_output_parses_back() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!("XOX".parse::<Board>(), Err(TimelineError::InvalidBoard(_))));
        assert!(matches!("XOXOXOXOXO".parse::<Board>(), Err(TimelineError::InvalidBoard(_))));
        assert!(matches!("XOXOXOXOZ".parse::<Board>(), Err(TimelineError::InvalidBoard(_))));
    }

    #[test]
    fn test_empty_positions() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::TopLeft));
        assert!(!empty.contains(&Position::Center));
    }

    #[test]
    fn test_board_serializes() {
        let board = Board::new().with_mark(Position::TopRight, Mark::O);
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
