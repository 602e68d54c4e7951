//! Cursor invariant: the cursor always names an existing snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `cursor < snapshots.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.cursor() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor is a valid index into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_through_jumps() {
        let mut game = GameHistory::replay(&[Position::TopLeft, Position::Center]);
        for target in [0, 2, 1, 9] {
            game.jump_to(target);
            assert!(CursorInBoundsInvariant::holds(&game));
        }
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameHistory::new();
        game.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
