//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (always goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Player whose turn it is after `moves_played` moves.
    ///
    /// X moves on even counts, O on odd ones.
    pub fn for_move_number(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board, one snapshot of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions whose squares differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|pos| board.is_empty(*pos)));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::O);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(board.diff(&next), vec![Position::Center]);
    }

    #[test]
    fn test_player_for_move_number() {
        assert_eq!(Player::for_move_number(0), Player::X);
        assert_eq!(Player::for_move_number(1), Player::O);
        assert_eq!(Player::for_move_number(8), Player::X);
    }
}
