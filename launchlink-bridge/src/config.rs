use anyhow::{Context, Result};
use launchlink_logger::LogConfig;
use serde::Deserialize;

use crate::dispatcher::GestureTiming;

/// The top-level configuration for the bridge binary.
///
/// The three required keys identify the bridge on the ledger; everything
/// else is optional and defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Secret URI the bridge account is derived from.
    pub account_seed: String,
    /// WebSocket endpoint of the ledger node.
    pub remote_node_url: String,
    /// Account crypto scheme: ED25519 or SR25519.
    pub crypto_type: String,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub gestures: GestureTiming,
    #[serde(default)]
    pub channels: ChannelConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Settings for the motion-controller run-up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Controller-side deadline for a single motion command, in seconds.
    pub motion_timeout_secs: u64,
}

/// Capacities for the channels between the connector and the dispatcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// How many launches may queue ahead of the dispatcher.
    pub event_buffer: usize,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            motion_timeout_secs: 10,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { event_buffer: 64 }
    }
}

/// Loads the bridge configuration from the YAML file at `path`.
///
/// Values can be overridden from the environment with a `LAUNCHLINK__`
/// prefix, e.g. `LAUNCHLINK__REMOTE_NODE_URL`.
pub fn load_config(path: &str) -> Result<BridgeConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix("LAUNCHLINK").separator("__"));

    let settings: BridgeConfig = builder
        .build()
        .context(format!("Failed to build configuration from '{}'", path))?
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    Ok(settings)
}
