//! In-process simulation backend for running the bridge without hardware.
//!
//! [`SimMotionClient`] records every call together with a monotonic
//! timestamp, so tests can assert both the sequence of gestures and the
//! pauses between them. It can also be flipped into a failing mode to
//! exercise the error path of the dispatcher.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::{MotionClient, MotionError};

/// One recorded invocation of the motion surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionCall {
    Initialize,
    SetTimeout(Duration),
    StandDown,
    Wave { turn: bool },
    ShakeHand,
}

/// A recorded call paired with the instant it was made.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub call: MotionCall,
    pub at: Instant,
}

/// A motion backend that records commands instead of moving hardware.
#[derive(Debug, Default)]
pub struct SimMotionClient {
    calls: Mutex<Vec<RecordedCall>>,
    fail_gestures: AtomicBool,
}

impl SimMotionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, gesture commands (`wave`, `shake_hand`) are rejected.
    /// Lifecycle commands keep succeeding so a partially healthy controller
    /// can be simulated.
    pub fn set_fail_gestures(&self, fail: bool) {
        self.fail_gestures.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of every recorded call, in invocation order.
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("sim call log poisoned").clone()
    }

    /// Snapshot of the recorded calls without their timestamps.
    pub fn calls(&self) -> Vec<MotionCall> {
        self.recorded().into_iter().map(|r| r.call).collect()
    }

    fn record(&self, call: MotionCall) {
        tracing::debug!(?call, "sim motion client invoked");
        self.calls
            .lock()
            .expect("sim call log poisoned")
            .push(RecordedCall {
                call,
                at: Instant::now(),
            });
    }

    fn gesture(&self, call: MotionCall) -> Result<(), MotionError> {
        if self.fail_gestures.load(Ordering::SeqCst) {
            return Err(MotionError::Rejected(format!("{call:?}")));
        }
        self.record(call);
        Ok(())
    }
}

#[async_trait]
impl MotionClient for SimMotionClient {
    async fn initialize(&self) -> Result<(), MotionError> {
        self.record(MotionCall::Initialize);
        Ok(())
    }

    async fn set_timeout(&self, timeout: Duration) -> Result<(), MotionError> {
        self.record(MotionCall::SetTimeout(timeout));
        Ok(())
    }

    async fn stand_down(&self) -> Result<(), MotionError> {
        self.record(MotionCall::StandDown);
        Ok(())
    }

    async fn wave(&self, turn: bool) -> Result<(), MotionError> {
        self.gesture(MotionCall::Wave { turn })
    }

    async fn shake_hand(&self) -> Result<(), MotionError> {
        self.gesture(MotionCall::ShakeHand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let sim = SimMotionClient::new();
        sim.set_timeout(Duration::from_secs(10)).await.unwrap();
        sim.initialize().await.unwrap();
        sim.stand_down().await.unwrap();
        sim.wave(true).await.unwrap();
        sim.shake_hand().await.unwrap();

        assert_eq!(
            sim.calls(),
            vec![
                MotionCall::SetTimeout(Duration::from_secs(10)),
                MotionCall::Initialize,
                MotionCall::StandDown,
                MotionCall::Wave { turn: true },
                MotionCall::ShakeHand,
            ]
        );
    }

    #[tokio::test]
    async fn failing_mode_rejects_gestures_only() {
        let sim = SimMotionClient::new();
        sim.set_fail_gestures(true);

        assert!(matches!(sim.wave(false).await, Err(MotionError::Rejected(_))));
        assert!(matches!(sim.shake_hand().await, Err(MotionError::Rejected(_))));
        sim.stand_down().await.unwrap();

        assert_eq!(sim.calls(), vec![MotionCall::StandDown]);
    }
}
