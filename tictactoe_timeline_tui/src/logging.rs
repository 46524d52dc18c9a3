//! Tracing subscriber setup.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Sends logs to the configured file so they never draw over the UI.
pub fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

/// Sends logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs where the configuration came from.
///
/// Config is loaded before the subscriber it configures, so this is
/// called once logging is up.
pub fn record_config(config: &TuiConfig, path: Option<&Path>) {
    match path {
        Some(path) => info!(
            path = %path.display(),
            log_file = %config.log_file().display(),
            "Config loaded successfully"
        ),
        None => debug!("No config file given, using defaults"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_output(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_record_config_reaches_subscriber_for_file() {
        let config = TuiConfig::default();
        let out = captured_output(|| record_config(&config, Some(Path::new("game.toml"))));
        assert!(out.contains("Config loaded successfully"));
        assert!(out.contains("game.toml"));
        assert!(out.contains("tictactoe_timeline.log"));
    }

    #[test]
    fn test_record_config_reaches_subscriber_for_defaults() {
        let out = captured_output(|| record_config(&TuiConfig::default(), None));
        assert!(out.contains("No config file given, using defaults"));
    }
}
