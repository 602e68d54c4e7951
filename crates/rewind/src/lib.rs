//! Terminal front-end for rewind tic-tac-toe.
//!
//! The game rules and history live in [`rewind_tictactoe`]; this crate adds
//! the command line, configuration file, logging setup and the ratatui UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod report;
pub mod tui;

pub use cli::Cli;
pub use config::{ConfigError, Palette, RewindConfig, ThemeConfig};
