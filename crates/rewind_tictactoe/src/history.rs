//! Game state manager: the full snapshot history plus a cursor.
//!
//! Turn and win status are never stored. Both are recomputed from the
//! snapshot under the cursor, so they cannot drift out of sync with it.

use super::action::Move;
use super::error::GameError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{WinResult, check_winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the board under the cursor.
///
/// There is no draw state: a full board without a line stays `InProgress`
/// with nobody able to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player whose mark the next move places.
        to_move: Player,
    },
    /// The board holds a completed line.
    Won(WinResult),
}

/// Ordered board snapshots from game start to the furthest move played.
///
/// Snapshot 0 is always the empty board and the history is never empty.
/// The cursor selects the snapshot currently shown and played from.
///
/// Deserialization checks [`HistoryInvariants`] and refuses any history that
/// breaks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of a [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = GameError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            warn!(count = violations.len(), "Refusing invalid history");
            GameError::InvalidHistory(violations.first().map(|v| v.description).unwrap_or_default())
        })?;
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Builds a history by playing `moves` in order.
    ///
    /// Illegal entries are skipped the same way [`apply_move`](Self::apply_move)
    /// skips them.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        let mut history = Self::new();
        for pos in moves {
            history.apply_move(*pos);
        }
        history
    }

    /// The snapshot under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the snapshot currently shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether there are no snapshots.
    ///
    /// Every constructor, including deserialization, guarantees at least the
    /// starting board, so this is `false` for any reachable history.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether the cursor sits on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Player to move at the cursor: X on even cursors, O on odd ones.
    pub fn to_move(&self) -> Player {
        Player::for_move_number(self.cursor)
    }

    /// Winning line on the board under the cursor, if any.
    pub fn winner(&self) -> Option<WinResult> {
        check_winner(self.current_board())
    }

    /// Derived status of the board under the cursor.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(win) => GameStatus::Won(win),
            None => GameStatus::InProgress {
                to_move: self.to_move(),
            },
        }
    }

    /// Plays the active player's mark at `pos`.
    ///
    /// Ignored when the cell is occupied or the current board is already
    /// won. Any snapshots after the cursor are discarded before the new one
    /// is appended.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(e) = self.try_apply_move(pos) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Like [`apply_move`](Self::apply_move), but reports why a move was ignored.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn try_apply_move(&mut self, pos: Position) -> Result<(), GameError> {
        let current = self.current_board();

        if let Some(win) = check_winner(current) {
            return Err(GameError::GameOver(win.winner()));
        }
        if !current.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }

        let player = self.to_move();
        let next = current.with_mark(pos, player);

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug!(?player, position = %pos, cursor = self.cursor, "Move applied");
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after move"
        );
        Ok(())
    }

    /// Plays at a raw cell index; indices outside 0-8 are ignored.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) {
        if let Err(e) = self.try_apply_index(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Like [`apply_index`](Self::apply_index), but reports why a move was ignored.
    #[instrument(skip(self))]
    pub fn try_apply_index(&mut self, index: usize) -> Result<(), GameError> {
        let pos = Position::from_index(index).ok_or(GameError::CellOutOfRange(index))?;
        self.try_apply_move(pos)
    }

    /// Moves the cursor to `move_index` without touching the snapshots.
    ///
    /// Out-of-range indices are ignored.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) {
        if let Err(e) = self.try_jump_to(move_index) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Like [`jump_to`](Self::jump_to), but reports an out-of-range request.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn try_jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        if move_index >= self.snapshots.len() {
            return Err(GameError::MoveOutOfRange {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = move_index;
        debug!(cursor = self.cursor, "Cursor moved");
        Ok(())
    }

    /// Moves the cursor one snapshot back, if possible.
    pub fn step_back(&mut self) {
        if let Some(prev) = self.cursor.checked_sub(1) {
            self.jump_to(prev);
        }
    }

    /// Moves the cursor one snapshot forward, if possible.
    pub fn step_forward(&mut self) {
        self.jump_to(self.cursor + 1);
    }

    /// Cell that changed to produce snapshot `move_index`.
    ///
    /// `None` for the game start and for indices past the end.
    pub fn move_location(&self, move_index: usize) -> Option<Position> {
        let prev = self.snapshots.get(move_index.checked_sub(1)?)?;
        let next = self.snapshots.get(move_index)?;
        prev.diff(next).first().copied()
    }

    /// Every move recorded in the history, including any after the cursor.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len())
            .filter_map(|index| {
                self.move_location(index)
                    .map(|pos| Move::new(Player::for_move_number(index - 1), pos))
            })
            .collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
