//! A client library for watching launch commands on a Robonomics-style chain.
//!
//! This crate covers the ledger side of the bridge: it derives the bridge's
//! account from a configured seed, connects to a remote node, and turns the
//! chain's `Launch.NewLaunch` events into a stream of [`events::LaunchEvent`]
//! values for the application to consume.
//!
//! # Key Components
//!
//! *   [`account::Account`]: seed + crypto-scheme account derivation.
//! *   [`client::LedgerClient`]: the WebSocket connection to the node.
//! *   [`listener::LaunchMonitor`]: the background worker that subscribes to
//!     finalized blocks and forwards launches addressed to the bridge account
//!     to its paired [`listener::LaunchListener`].

/// Account derivation from a secret seed under an enumerated crypto scheme.
pub mod account;
/// The node connection.
pub mod client;
/// The launch event wire type and its decoding.
pub mod events;
/// The finalized-block subscription worker and its consumer endpoint.
pub mod listener;
