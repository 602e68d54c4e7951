//! Tracing subscriber setup.

use crate::config::RewindConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to the configured file so output does not interfere with the TUI.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_file(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs warnings and above to stderr, for non-interactive runs.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
