//! First-class move records for tic-tac-toe.
//!
//! The history stores board snapshots; moves are derived from consecutive
//! snapshots so they can be listed, logged and replayed.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {})",
            self.player,
            self.position.label(),
            self.position.row() + 1,
            self.position.column() + 1
        )
    }
}
