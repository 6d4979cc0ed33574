//! # Launch Monitor
//!
//! The [`LaunchMonitor`] is the background worker that feeds the bridge: it
//! subscribes to finalized blocks, picks out `Launch.NewLaunch` events whose
//! recipient is the bridge account, and forwards them over an mpsc channel.
//! The receiving half lives in the paired [`LaunchListener`]; dropping the
//! listener is the shutdown signal for the monitor.
//!
//! Launches addressed to other accounts are skipped silently (at trace
//! level); a malformed event record is logged and skipped without tearing
//! the subscription down. A dropped transport, on the other hand, ends the
//! stream and the monitor returns: reconnection is deliberately left to the
//! process supervisor.

use anyhow::Result;
use futures::StreamExt;
use subxt::blocks::Block;
use subxt::utils::AccountId32;
use subxt::{OnlineClient, PolkadotConfig};
use tokio::sync::mpsc;

use crate::client::LedgerClient;
use crate::events::{self, LaunchEvent};

/// Consumer endpoint for launches addressed to the bridge account.
#[derive(Debug)]
pub struct LaunchListener {
    launch_rx: mpsc::Receiver<LaunchEvent>,
}

impl LaunchListener {
    /// Receives the next launch. Returns `None` once the monitor has shut
    /// down and the channel is drained.
    pub async fn next_launch(&mut self) -> Option<LaunchEvent> {
        self.launch_rx.recv().await
    }
}

/// Background worker that watches the chain for launches.
pub struct LaunchMonitor {
    client: LedgerClient,
    recipient: AccountId32,
    launch_tx: mpsc::Sender<LaunchEvent>,
}

impl LaunchMonitor {
    /// Creates the monitor and its paired listener.
    ///
    /// `recipient` is the account launches must be addressed to; `buffer`
    /// bounds the number of launches queued ahead of the consumer.
    pub fn new(
        client: LedgerClient,
        recipient: AccountId32,
        buffer: usize,
    ) -> (Self, LaunchListener) {
        let (launch_tx, launch_rx) = mpsc::channel(buffer);
        let monitor = Self {
            client,
            recipient,
            launch_tx,
        };
        (monitor, LaunchListener { launch_rx })
    }

    /// Runs the subscription until the listener is dropped or the block
    /// stream ends. Should be spawned as a background task.
    pub async fn run(self) -> Result<()> {
        let mut blocks = self.client.api().blocks().subscribe_finalized().await?;
        tracing::info!(recipient = %self.recipient, "watching finalized blocks for launches");

        loop {
            tokio::select! {
                maybe_block = blocks.next() => match maybe_block {
                    Some(block) => self.handle_block(block?).await,
                    None => {
                        tracing::warn!("finalized block stream ended");
                        break;
                    }
                },
                _ = self.launch_tx.closed() => {
                    tracing::info!("launch listener dropped, monitor exiting");
                    break;
                }
            }
        }
        Ok(())
    }

    async fn handle_block(&self, block: Block<PolkadotConfig, OnlineClient<PolkadotConfig>>) {
        let events = match block.events().await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!(block = %block.hash(), error = %e, "failed to fetch block events");
                return;
            }
        };

        for details in events.iter() {
            let details = match details {
                Ok(details) => details,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable event record");
                    continue;
                }
            };
            if details.pallet_name() != events::LAUNCH_PALLET
                || details.variant_name() != events::NEW_LAUNCH_EVENT
            {
                continue;
            }

            let record = match events::decode_new_launch(details.field_bytes()) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed launch record");
                    continue;
                }
            };
            let event = LaunchEvent::from(record);
            if event.recipient != self.recipient {
                tracing::trace!(recipient = %event.recipient, "launch for another account");
                continue;
            }

            tracing::info!(sender = %event.sender, "launch received");
            if self.launch_tx.send(event).await.is_err() {
                return;
            }
        }
    }
}
