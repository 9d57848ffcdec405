//! Auto-rotation timing: wall-clock-driven yaw and cooperative
//! cancellation.
//!
//! Yaw is derived from elapsed time rather than incremented per frame, so
//! rotation speed is independent of the display refresh rate and frame drops
//! cause no drift.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::camera::normalize_yaw;

/// One auto-rotation run: captured start yaw and start time.
///
/// At most one session is active per viewer; the scheduler enforces this by
/// refusing to start while running and by cancelling the prior token first.
#[derive(Debug, Clone, Copy)]
pub struct RotationSession {
    pub start_yaw: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl RotationSession {
    /// Begin a session at the engine's current yaw.
    #[must_use]
    pub fn begin(start_yaw: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self { start_yaw, start_ms, duration_ms }
    }

    /// Yaw for the given wall-clock instant, normalized into [0, 360).
    ///
    /// One full `duration_ms` period returns exactly to the start yaw
    /// (mod 360), making the rotation resumable from any orientation.
    #[must_use]
    pub fn yaw_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return normalize_yaw(self.start_yaw);
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let progress = (elapsed % self.duration_ms) / self.duration_ms;
        normalize_yaw(self.start_yaw + progress * 360.0)
    }
}

/// Start/stop bookkeeping for the frame scheduler: the running flag and
/// the token of the active session, kept apart from the animation-frame
/// I/O so the transitions are testable natively.
///
/// `begin` refuses to start while running; `stop` is idempotent and safe
/// before any `begin`. An old token is always cancelled before a new
/// session's token is issued, so two sessions can never both be live.
#[derive(Debug, Default)]
pub struct SchedulerState {
    running: bool,
    token: CancelToken,
}

impl SchedulerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a session, handing out its fresh cancel token. `None` while a
    /// session is already running.
    pub fn begin(&mut self) -> Option<CancelToken> {
        if self.running {
            return None;
        }
        self.token.cancel();
        self.token = CancelToken::new();
        self.running = true;
        Some(self.token.clone())
    }

    /// Cancel the active session, if any.
    pub fn stop(&mut self) {
        self.token.cancel();
        self.running = false;
    }
}

/// Shared cancellation flag checked after every suspension point.
///
/// Cloning shares the flag; cancelling is sticky and idempotent. A teardown
/// during an in-flight async step therefore cannot mutate state afterwards.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
