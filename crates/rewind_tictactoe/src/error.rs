//! Reasons a move or a jump was ignored, or a history was refused.

use super::{Player, Position};

/// Why a requested transition did not change the game.
///
/// The plain `apply_move`/`jump_to` operations swallow these; the `try_*`
/// variants return them for callers that want to explain the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The board at the cursor already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(#[error(not(source))] Player),

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// A history index past the last snapshot.
    #[display("Move #{} does not exist (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// The requested history index.
        requested: usize,
        /// Current history length.
        len: usize,
    },

    /// A deserialized history breaks one of its invariants.
    #[display("Invalid history: {}", _0)]
    InvalidHistory(#[error(not(source))] &'static str),
}
