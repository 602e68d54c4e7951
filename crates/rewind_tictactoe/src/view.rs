//! Presentation data derived from a [`GameHistory`].
//!
//! Front-ends render these values as they see fit; nothing here knows about
//! terminals, colours or layout.

use super::{GameHistory, GameStatus, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line for the board under the cursor.
///
/// `"Winner: X"` once a line is complete, `"Next player: O"` otherwise.
pub fn status_line(game: &GameHistory) -> String {
    match game.status() {
        GameStatus::Won(win) => format!("Winner: {}", win.winner()),
        GameStatus::InProgress { to_move } => format!("Next player: {}", to_move),
    }
}

/// One cell of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// Its contents.
    pub square: Square,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Text shown for the entry.
    pub label: String,
    /// The cursor is here; the entry is shown as plain text, not as a button.
    pub is_current: bool,
    /// Cell played to reach this snapshot (`None` for the game start).
    pub location: Option<Position>,
}

impl MoveEntry {
    /// Whether selecting this entry would move the cursor.
    pub fn is_selectable(&self) -> bool {
        !self.is_current
    }

    /// `(row, col)` of the move, one-based, as shown next to the label.
    pub fn location_label(&self) -> Option<String> {
        self.location
            .map(|pos| format!("({}, {})", pos.row() + 1, pos.column() + 1))
    }
}

/// Cells of the board under the cursor, winning line highlighted.
pub fn cells(game: &GameHistory) -> [CellView; 9] {
    let board = game.current_board();
    let win = game.winner();
    Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        highlighted: win.is_some_and(|w| w.contains(position)),
    })
}

/// The move list, one entry per snapshot.
pub fn move_entries(game: &GameHistory) -> Vec<MoveEntry> {
    (0..game.len())
        .map(|index| {
            let is_current = index == game.cursor();
            let label = if is_current {
                format!("You are at move #{}", index)
            } else if index > 0 {
                format!("Go to move #{}", index)
            } else {
                "Go to game start".to_string()
            };
            MoveEntry {
                index,
                label,
                is_current,
                location: game.move_location(index),
            }
        })
        .collect()
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Status line text.
    pub status: String,
    /// The nine cells in row-major order.
    pub cells: [CellView; 9],
    /// Move list entries, oldest first.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Builds the view for the current cursor.
    #[instrument(skip(game), fields(cursor = game.cursor(), len = game.len()))]
    pub fn from_history(game: &GameHistory) -> Self {
        Self {
            status: status_line(game),
            cells: cells(game),
            moves: move_entries(game),
        }
    }
}
