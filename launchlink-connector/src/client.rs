//! The connection to a remote ledger node.

use anyhow::{Context, Result};
use subxt::{OnlineClient, PolkadotConfig};

/// A thin wrapper over the subxt online client.
///
/// Connecting is the only operation with its own failure mode worth naming;
/// everything else goes through [`api`](Self::api). The client does not
/// reconnect: if the transport drops, the subscription built on top of it
/// ends and the caller decides what to do with the process.
pub struct LedgerClient {
    api: OnlineClient<PolkadotConfig>,
}

impl LedgerClient {
    /// Connects to the node at `url` (a `ws://` or `wss://` endpoint).
    pub async fn connect(url: &str) -> Result<Self> {
        let api = OnlineClient::<PolkadotConfig>::from_url(url)
            .await
            .with_context(|| format!("failed to connect to ledger node at '{url}'"))?;
        tracing::info!(%url, "connected to ledger node");
        Ok(Self { api })
    }

    pub fn api(&self) -> &OnlineClient<PolkadotConfig> {
        &self.api
    }
}
