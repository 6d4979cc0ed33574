pub mod cli;
pub mod config;
pub mod dispatcher;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use launchlink_connector::account::Account;
use launchlink_connector::client::LedgerClient;
use launchlink_connector::listener::LaunchMonitor;
use launchlink_robot::sim::SimMotionClient;
use launchlink_robot::MotionClient;
use tokio::signal;

use cli::Cli;
use config::{load_config, BridgeConfig};
use dispatcher::CommandDispatcher;

/// The main entry point for the bridge binary.
///
/// Parses the CLI, loads configuration, initializes logging, and runs
/// against the simulation motion backend. Deployments with real hardware
/// call [`run_with_robot`] with their own [`MotionClient`] implementation.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    launchlink_logger::init(&config.log)?;
    tracing::info!("starting the launch bridge");

    run_with_robot(config, Arc::new(SimMotionClient::new())).await
}

/// Runs the bridge against the given motion backend until ctrl-c arrives or
/// the ledger subscription ends.
///
/// Startup order follows the controller's expectations: command deadline
/// first, then bring the control channel up, then damp into a known
/// posture. Any failure before the event loop is fatal.
pub async fn run_with_robot<M>(config: BridgeConfig, robot: Arc<M>) -> Result<()>
where
    M: MotionClient + 'static,
{
    robot
        .set_timeout(Duration::from_secs(config.robot.motion_timeout_secs))
        .await
        .context("failed to set the motion command timeout")?;
    robot
        .initialize()
        .await
        .context("failed to initialize the motion client")?;
    robot
        .stand_down()
        .await
        .context("failed to stand the robot down")?;

    let account = Account::derive(&config.account_seed, &config.crypto_type)
        .context("problem with account creation")?;
    tracing::info!(
        address = %account.address(),
        scheme = %account.scheme(),
        "bridge account ready"
    );

    let client = LedgerClient::connect(&config.remote_node_url).await?;
    let (monitor, mut listener) = LaunchMonitor::new(
        client,
        account.account_id().clone(),
        config.channels.event_buffer,
    );
    let monitor_task = tokio::spawn(monitor.run());

    let dispatcher = CommandDispatcher::new(robot, config.gestures.clone());

    loop {
        tokio::select! {
            maybe_launch = listener.next_launch() => match maybe_launch {
                Some(event) => {
                    let outcome = dispatcher.handle_event(&event).await;
                    tracing::debug!(?outcome, "launch handled");
                }
                None => {
                    tracing::warn!("launch stream ended, shutting down");
                    break;
                }
            },
            _ = signal::ctrl_c() => {
                tracing::info!("received ctrl-c, shutting down");
                break;
            }
        }
    }

    // Dropping the listener is the monitor's shutdown signal.
    drop(listener);
    match monitor_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "launch monitor exited with an error"),
        Err(e) => tracing::error!(error = %e, "launch monitor task panicked"),
    }
    tracing::info!("shutdown complete");

    Ok(())
}
