//! # Command Dispatcher
//!
//! The dispatcher owns the mapping from decoded launch commands to robot
//! gestures. It is deliberately a plain value type over an explicit motion
//! client: [`handle_event`](CommandDispatcher::handle_event) takes a
//! [`LaunchEvent`] and returns an [`Outcome`], and the wiring that feeds it
//! live events lives in the binary's run loop, not here.
//!
//! Every failure on this path degrades to a dropped event plus a log line.
//! Nothing is retried and nothing propagates; only startup errors are fatal
//! to the process.

use std::sync::Arc;
use std::time::Duration;

use launchlink_codec::CodecError;
use launchlink_connector::events::LaunchEvent;
use launchlink_robot::{MotionClient, MotionError};
use serde::Deserialize;
use tokio::time::sleep;

/// Gestures the bridge can ask of the robot.
///
/// The command table is static: launch text `"0"`, `"1"` and `"2"` map to
/// the three gestures, anything else is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCommand {
    /// A single hand wave.
    Wave,
    /// A hand wave with a torso turn.
    WaveWithTurn,
    /// Two handshakes with a pause in between.
    DoubleShake,
}

impl GestureCommand {
    pub fn from_command_text(text: &str) -> Option<Self> {
        match text {
            "0" => Some(Self::Wave),
            "1" => Some(Self::WaveWithTurn),
            "2" => Some(Self::DoubleShake),
            _ => None,
        }
    }
}

/// What handling one launch event came to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The gesture ran and the settle interval elapsed.
    Performed(GestureCommand),
    /// The decoded text is not in the command table; no robot action taken.
    UnknownCommand(String),
    /// The launch parameter did not decode; the event was dropped.
    DecodeFailed(CodecError),
    /// The motion client rejected the gesture; the event was dropped.
    GestureFailed(MotionError),
}

/// Pauses around robot invocations, in whole seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GestureTiming {
    /// Settle time after every completed gesture.
    pub settle_secs: u64,
    /// Pause between the two handshakes of [`GestureCommand::DoubleShake`].
    pub shake_repeat_pause_secs: u64,
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self {
            settle_secs: 1,
            shake_repeat_pause_secs: 3,
        }
    }
}

impl GestureTiming {
    fn settle(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }

    fn shake_repeat_pause(&self) -> Duration {
        Duration::from_secs(self.shake_repeat_pause_secs)
    }
}

/// Routes decoded launch commands to the motion client.
pub struct CommandDispatcher<M> {
    robot: Arc<M>,
    timing: GestureTiming,
}

impl<M: MotionClient> CommandDispatcher<M> {
    pub fn new(robot: Arc<M>, timing: GestureTiming) -> Self {
        Self { robot, timing }
    }

    /// Handles one launch event: decode, look up, perform.
    ///
    /// Gestures are awaited inline, so this call blocks the event path for
    /// the duration of the gesture plus the settle interval. Launches are
    /// human-triggered and sparse; there is no queueing.
    pub async fn handle_event(&self, event: &LaunchEvent) -> Outcome {
        let text = match launchlink_codec::decode(&event.param) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    sender = %event.sender,
                    error = %e,
                    "dropping launch with undecodable parameter"
                );
                return Outcome::DecodeFailed(e);
            }
        };
        tracing::info!(sender = %event.sender, command = %text, "launch command decoded");

        let Some(command) = GestureCommand::from_command_text(&text) else {
            tracing::info!(command = %text, "unknown command to robot");
            return Outcome::UnknownCommand(text);
        };

        match self.perform(command).await {
            Ok(()) => Outcome::Performed(command),
            Err(e) => {
                tracing::error!(?command, error = %e, "gesture failed, dropping launch");
                Outcome::GestureFailed(e)
            }
        }
    }

    async fn perform(&self, command: GestureCommand) -> Result<(), MotionError> {
        match command {
            GestureCommand::Wave => {
                self.robot.wave(false).await?;
                tracing::info!("robot is waving hand");
            }
            GestureCommand::WaveWithTurn => {
                self.robot.wave(true).await?;
                tracing::info!("robot is waving hand with a turn");
            }
            GestureCommand::DoubleShake => {
                self.robot.shake_hand().await?;
                sleep(self.timing.shake_repeat_pause()).await;
                self.robot.shake_hand().await?;
                tracing::info!("robot is shaking hand");
            }
        }
        sleep(self.timing.settle()).await;
        Ok(())
    }
}
