//! Byte-stream frame synchronization.
//!
//! The bus carries no length prefix and no inter-frame gap marker; the only
//! structure is the sync byte opening each 8-byte frame and the end marker
//! closing it. [`FrameSync`] turns the raw byte stream back into frames and
//! recovers from corruption by rescanning for the next sync byte.
//!
//! ## Resynchronization
//!
//! When a collected window does not close with the end marker the whole
//! 8 bytes are dropped and scanning restarts with the next byte off the
//! wire. Dropped bytes are not re-examined: a sync byte inside the dropped
//! window is lost with it, which can skip one valid frame after noise. The
//! units repeat their status continuously, so the stream realigns on the
//! next frame.

use crate::protocol::constants::{END_MARKER, FRAME_LEN, SYNC_MARKER};
use crate::protocol::frame::Frame;

/// Synchronizer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum SyncState {
    /// Discarding bytes until a sync marker appears
    Scanning,
    /// Accumulating the remainder of an 8-byte window
    Collecting,
}

/// Incremental frame synchronizer.
///
/// Feed bytes with [`push`](Self::push) as they arrive; a complete validated
/// frame comes back the moment its final byte goes in. The same instance
/// serves both the non-blocking per-cycle poll and the blocking acquisition
/// wait, so a frame split across polls is assembled seamlessly.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameSync {
    state: SyncState,
    buf: [u8; FRAME_LEN],
    len: usize,
}

impl FrameSync {
    /// Create a synchronizer in the scanning state.
    pub const fn new() -> Self {
        Self {
            state: SyncState::Scanning,
            buf: [0; FRAME_LEN],
            len: 0,
        }
    }

    /// Consume one byte from the stream.
    ///
    /// Returns a frame exactly when `byte` completes a valid 8-byte window.
    pub fn push(&mut self, byte: u8) -> Option<Frame> {
        match self.state {
            SyncState::Scanning => {
                if byte == SYNC_MARKER {
                    self.buf[0] = byte;
                    self.len = 1;
                    self.state = SyncState::Collecting;
                } else {
                    fuji_log!(trace, "discarding pre-sync byte {:02x}", byte);
                }
                None
            }
            SyncState::Collecting => {
                if self.len >= FRAME_LEN {
                    // Unreachable through this API; recover anyway
                    self.reset();
                    return self.push(byte);
                }
                self.buf[self.len] = byte;
                self.len += 1;
                if self.len < FRAME_LEN {
                    return None;
                }
                let closed = self.buf[FRAME_LEN - 1] == END_MARKER;
                if !closed {
                    fuji_log!(
                        warn,
                        "end marker mismatch ({:02x}), dropping 8-byte window",
                        self.buf[FRAME_LEN - 1]
                    );
                }
                let frame = closed.then(|| Frame::from_bytes(self.buf));
                self.reset();
                frame
            }
        }
    }

    /// Drop any partial window and return to scanning.
    pub fn reset(&mut self) {
        self.state = SyncState::Scanning;
        self.len = 0;
    }

    /// True while a partially collected window is buffered.
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, SyncState::Collecting)
    }
}

impl Default for FrameSync {
    fn default() -> Self {
        Self::new()
    }
}
