//! Tracing initialization for the launchlink binaries.
//!
//! The bridge describes its logging in the configuration file; this crate
//! turns that description into an installed `tracing` subscriber. The
//! `RUST_LOG` environment variable, when set, overrides the configured
//! level with a full filter directive.

use std::fs::File;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Plain,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Stdout,
    File,
}

/// Declarative logging settings, deserialized from the bridge config.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Log level, e.g. "info", "debug", "trace".
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Path to the log file, required if output is "file".
    pub file_path: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Plain,
            output: LogOutput::Stdout,
            file_path: None,
        }
    }
}

/// Installs the global subscriber described by `config`.
///
/// Returns an error if the log file cannot be created or if a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.output {
        LogOutput::File => {
            let path = config
                .file_path
                .as_deref()
                .context("log output is 'file' but 'file_path' is not specified")?;
            let log_file = std::sync::Arc::new(
                File::create(path)
                    .with_context(|| format!("failed to create log file '{path}'"))?,
            );
            match config.format {
                LogFormat::Json => builder.json().with_writer(log_file).try_init(),
                LogFormat::Plain => builder.with_writer(log_file).try_init(),
            }
        }
        LogOutput::Stdout => match config.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Plain => builder.try_init(),
        },
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_stdout_info() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Plain);
        assert_eq!(config.output, LogOutput::Stdout);
        assert!(config.file_path.is_none());
    }
}
