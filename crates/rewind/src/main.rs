//! Rewind - tic-tac-toe with a time-travel move list.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, RewindConfig, logging, replay, report, tui};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RewindConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }
    let palette = config.theme().palette()?;

    if cli.print {
        logging::init_stderr();
    } else {
        logging::init_file(&config)
            .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    }

    let game = replay::replay_indices(&cli.moves);
    info!(len = game.len(), cursor = game.cursor(), "Game ready");

    if cli.print {
        print!("{}", report::render(&game));
        return Ok(());
    }

    tui::run(tui::App::new(game), palette)
}
