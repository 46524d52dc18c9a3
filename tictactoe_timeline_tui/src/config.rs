//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File receiving log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show 1-based square numbers in empty cells.
    #[serde(default = "default_true")]
    show_cell_numbers: bool,

    /// Highlight the three squares of a winning line.
    #[serde(default = "default_true")]
    highlight_winning_line: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_timeline.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_cell_numbers: default_true(),
            highlight_winning_line: default_true(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before any subscriber exists, so it reports through its
    /// return value only. See [`crate::logging::record_config`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
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
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert!(*config.show_cell_numbers());
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let file = write_config(
            r#"
log_filter = "debug,tictactoe_timeline=trace"
highlight_winning_line = false
"#,
        );
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "debug,tictactoe_timeline=trace");
        assert!(!*config.highlight_winning_line());
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = write_config("show_cell_numbers = \"sometimes\"");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(TuiConfig::load(None).unwrap(), TuiConfig::default());
    }
}
