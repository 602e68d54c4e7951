//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a single board. Rules are kept apart from
//! history management so any snapshot can be judged on its own.

pub mod win;

pub use win::{WINNING_LINES, WinResult, check_winner};
