//! Named board positions for tic-tac-toe moves.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
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

    /// Label for this position (for display).
    pub fn label(&self) -> &'static str {
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

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Zero-based row (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column (0 = left).
    pub fn column(self) -> usize {
        self.to_index() % 3
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
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_is_row_major() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
            assert_eq!(pos.row() * 3 + pos.column(), index);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_column() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
        assert_eq!(Position::from_row_column(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_column(3, 0), None);
    }
}
