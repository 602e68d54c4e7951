//! Configuration file for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Top-level configuration, loaded from TOML.
///
/// Every key is optional; missing keys take the [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RewindConfig {
    /// File the UI writes its log to.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Colours used when drawing the board.
    theme: ThemeConfig,
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("rewind.log"),
            log_filter: "info".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates the theme.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Colour names for the board, as written in the config file.
///
/// Any name ratatui's [`Color`] parser accepts works: `"red"`,
/// `"lightblue"`, `"#ff8800"`, or a 0-255 index.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour of X marks.
    x: String,
    /// Colour of O marks.
    o: String,
    /// Background of the winning cells.
    highlight: String,
    /// Background of the selected cell.
    selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x: "blue".to_string(),
            o: "red".to_string(),
            highlight: "green".to_string(),
            selector: "white".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses every colour name.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x", &self.x)?,
            o: parse_color("o", &self.o)?,
            highlight: parse_color("highlight", &self.highlight)?,
            selector: parse_color("selector", &self.selector)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for theme.{}: {:?}", key, value)))
}

/// Parsed theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Background of the winning cells.
    pub highlight: Color,
    /// Background of the selected cell.
    pub selector: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Green,
            selector: Color::White,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
