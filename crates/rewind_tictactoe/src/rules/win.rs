//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const WINNING_LINES: [[Position; 3]; 8] = [
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

/// A completed line: who won and which three cells did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    winner: Player,
    line: [Position; 3],
}

impl WinResult {
    /// The player owning the winning line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The three winning cells, in line order.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is one of the winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WINNING_LINES`] whose three squares hold the
/// same mark. A full board without such a line is `None`; there is no
/// separate draw result. The board is not checked for legal alternation.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinResult> {
    WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(winner) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinResult { winner, line })
            }
            _ => None,
        }
    })
}
