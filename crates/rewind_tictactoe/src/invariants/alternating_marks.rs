//! Alternating marks invariant: X, O, X, O, ... from the start.

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: the mark added at snapshot `i` belongs to X when `i` is odd.
///
/// This is what makes "X to move iff the cursor is even" true for every
/// snapshot a cursor can land on.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(game: &GameHistory) -> bool {
        (1..game.snapshots().len()).all(|index| {
            let expected = Square::Occupied(Player::for_move_number(index - 1));
            game.move_location(index)
                .is_some_and(|pos| game.snapshots()[index].get(pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_replayed_game_holds() {
        let game = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]);
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut game = GameHistory::replay(&[Position::Center]);
        game.snapshots[1].set(Position::Center, Square::Occupied(Player::O));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
