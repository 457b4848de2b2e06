//! Configuration for the command-line harness.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from an optional TOML file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print every board during self-play, not just the last one.
    #[serde(default = "default_show_boards")]
    show_boards: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_show_boards() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_boards: default_show_boards(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::load(None).expect("defaults");
        assert_eq!(config.log_filter(), "info");
        assert!(*config.show_boards());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("log_filter = \"minimax_tictactoe=debug\"\nshow_boards = false\n");
        let config = CliConfig::load(Some(file.path())).expect("valid config");
        assert_eq!(config.log_filter(), "minimax_tictactoe=debug");
        assert!(!*config.show_boards());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("show_boards = false\n");
        let config = CliConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.log_filter(), "info");
        assert!(!*config.show_boards());
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("show_boards = \"sometimes\"\n");
        let err = CliConfig::from_file(file.path()).expect_err("bad type");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file("/nonexistent/minimax.toml").expect_err("no file");
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
