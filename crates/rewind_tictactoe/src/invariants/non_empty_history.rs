//! Non-empty history invariant: snapshot 0 exists and is the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: history is never empty and starts from the empty board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<GameHistory> for NonEmptyHistoryInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
