//! # Robot Motion Capability
//!
//! The bridge only ever talks to the robot through the [`MotionClient`]
//! trait, so the hardware SDK binding can be swapped without touching the
//! command-dispatch logic. A hardware backend implements this trait against
//! the vendor's high-level locomotion client; [`sim::SimMotionClient`] is
//! the in-process backend used by tests and headless runs.

pub mod sim;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a motion controller backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    #[error("motion command rejected by the controller: {0}")]
    Rejected(String),

    #[error("motion controller unreachable: {0}")]
    Unreachable(String),
}

/// High-level motion control surface of the robot.
///
/// All calls are awaited to completion; none of them queue. A gesture call
/// returns once the controller has accepted (not necessarily finished) the
/// motion, matching the fire-and-forget contract of the underlying SDKs.
#[async_trait]
pub trait MotionClient: Send + Sync {
    /// Brings the high-level control channel up. Must be called before any
    /// gesture command.
    async fn initialize(&self) -> Result<(), MotionError>;

    /// Sets the controller-side deadline for individual motion commands.
    async fn set_timeout(&self, timeout: Duration) -> Result<(), MotionError>;

    /// Damps all joints into a safe stand-down posture.
    async fn stand_down(&self) -> Result<(), MotionError>;

    /// Waves the hand; with `turn` the robot turns its torso into the wave.
    async fn wave(&self, turn: bool) -> Result<(), MotionError>;

    /// Extends the hand for a handshake.
    async fn shake_hand(&self) -> Result<(), MotionError>;
}
