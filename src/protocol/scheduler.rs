//! Outbound command scheduling.
//!
//! The indoor unit listens for controller commands only during a short
//! window after its own status transmission. [`TxScheduler`] holds at most
//! one staged command frame and computes how long the line must stay quiet
//! before that frame may go out. It never touches the bus itself; the
//! client layer asks for the required delay and performs the wait and the
//! write.
//!
//! Staging is last-writer-wins. Several setting changes made between two
//! transmit opportunities collapse into a single frame carrying the final
//! values, which matches how the unit itself treats rapid-fire commands.

use core::time::Duration;

use crate::protocol::constants::REPLY_DELAY;
use crate::protocol::frame::Frame;

/// Single-slot transmit scheduler with a post-receive quiet period.
#[derive(Debug, Default)]
pub struct TxScheduler {
    pending: Option<Frame>,
    last_rx: Option<Duration>,
}

impl TxScheduler {
    /// Create a scheduler with nothing staged and no receive history.
    pub const fn new() -> Self {
        Self {
            pending: None,
            last_rx: None,
        }
    }

    /// Stage `frame` for transmission, replacing any staged predecessor.
    pub fn stage(&mut self, frame: Frame) {
        self.pending = Some(frame);
    }

    /// True while a frame is staged.
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The staged frame, if any.
    pub const fn pending(&self) -> Option<Frame> {
        self.pending
    }

    /// Record that a frame finished arriving at timestamp `at`.
    pub fn mark_received(&mut self, at: Duration) {
        self.last_rx = Some(at);
    }

    /// Time the bus must remain quiet before transmitting at `now`.
    ///
    /// Zero once the reply window has already elapsed, and zero when no
    /// frame has ever been received; with nothing heard from the unit there
    /// is no transmission to keep clear of.
    pub const fn required_delay(&self, now: Duration) -> Duration {
        match self.last_rx {
            None => Duration::ZERO,
            Some(rx) => REPLY_DELAY.saturating_sub(now.saturating_sub(rx)),
        }
    }

    /// Drop the staged frame after a successful write.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
