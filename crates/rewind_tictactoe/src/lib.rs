//! Tic-tac-toe game logic with a time-travel move history.
//!
//! The crate is split into a few small layers:
//!
//! - **Types**: [`Board`], [`Square`], [`Player`] and the nine named [`Position`]s
//! - **Rules**: [`check_winner`] maps a board to an optional [`WinResult`]
//! - **History**: [`GameHistory`] owns every snapshot played so far plus a cursor
//! - **Invariants**: checkable properties of a [`GameHistory`]
//! - **View**: presentation data (status line, cells, move list) for front-ends
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Player, Position};
//!
//! let mut game = GameHistory::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleRight, Position::TopRight] {
//!     game.apply_move(pos);
//! }
//! let win = game.winner().expect("X completed the top row");
//! assert_eq!(win.winner(), Player::X);
//!
//! // Travel back and branch: the abandoned future is discarded.
//! game.jump_to(2);
//! game.apply_move(Position::BottomLeft);
//! assert_eq!(game.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
pub mod view;

pub use action::Move;
pub use error::GameError;
pub use history::{GameHistory, GameStatus};
pub use position::Position;
pub use rules::{WINNING_LINES, WinResult, check_winner};
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry};
