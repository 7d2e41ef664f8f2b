//! Application configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::ui::ThemeKind;

/// User configuration for the application.
///
/// Every field is optional; CLI flags win over config values, config values
/// over built-in defaults.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Color theme preset.
    #[serde(default)]
    theme: Option<ThemeKind>,

    /// Log file path.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective theme: CLI flag, then config file, then default.
    pub fn resolve_theme(&self, cli_theme: Option<ThemeKind>) -> ThemeKind {
        cli_theme.or(self.theme).unwrap_or_default()
    }

    /// Resolves the effective log file path: CLI flag, then config file,
    /// then `tictactui.log` in the working directory.
    pub fn resolve_log_file(&self, cli_log_file: Option<PathBuf>) -> PathBuf {
        cli_log_file
            .or_else(|| self.log_file.clone())
            .unwrap_or_else(|| PathBuf::from("tictactui.log"))
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
