//! Board positions for tic-tac-toe moves.

use crate::TimelineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the 3x3 board.
///
/// Indices run row-major: `row = index / 3`, `col = index % 3`.
/// Taking a `Position` instead of a raw index keeps out-of-range
/// plays out of the game state entirely.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index, `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2), top to bottom.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2), left to right.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Parses an index (`0`-`8`) or a label.
    ///
    /// Labels match case-insensitively and ignore `-`, `_` and spaces,
    /// so `"top-left"`, `"TopLeft"` and `"top left"` are equivalent.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<usize> for Position {
    type Error = TimelineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(TimelineError::InvalidPosition(index))
    }
}

impl std::str::FromStr for Position {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::try_from(num);
        }
        Self::from_label_or_number(s).ok_or_else(|| TimelineError::UnknownPosition(s.to_string()))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(pos.row(), i / 3);
            assert_eq!(pos.col(), i % 3);
        }
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::try_from(42), Err(TimelineError::InvalidPosition(42)));
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top-Left"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("bottom right"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("9"), None);
        assert_eq!(Position::from_label_or_number("top"), None);
        assert_eq!(Position::from_label_or_number(""), None);
    }

    #[test]
    fn test_from_str_reports_kind_of_failure() {
        assert_eq!("12".parse::<Position>(), Err(TimelineError::InvalidPosition(12)));
        assert_eq!(
            "nowhere".parse::<Position>(),
            Err(TimelineError::UnknownPosition("nowhere".to_string()))
        );
        assert_eq!("middle-right".parse::<Position>(), Ok(Position::MiddleRight));
    }
}
