//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travel move list
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the configured one)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Cell indices (0-8) to play before the game is shown, e.g. "0,4,1"
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<usize>,

    /// Print the board, status and move list to stdout instead of starting the UI
    #[arg(long)]
    pub print: bool,
}
