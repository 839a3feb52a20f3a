//! Mock serial bus for testing.
//!
//! This module provides a mock implementation of [`SerialBus`] that can be
//! used in unit tests to exercise the protocol logic without serial hardware.
//!
//! The mock owns a virtual clock: `now()` reports it and `delay()` advances
//! it, so wait loops and the reply-window delay run deterministically and a
//! test can assert exactly how long an operation parked.
//!
//! ## Example
//!
//! ```rust
//! use fujilink::bus::{MockBus, SerialBus};
//!
//! let mut mock = MockBus::new();
//!
//! // Script received bytes
//! mock.push_bytes(&[0xFE, 0x00, 0x00]);
//! assert!(mock.available());
//! assert_eq!(mock.read_byte(), Some(0xFE));
//!
//! // Inspect what was written
//! mock.write_all(&[0xAA, 0xBB]).unwrap();
//! assert_eq!(mock.sent(), &[0xAA, 0xBB]);
//! ```

use core::time::Duration;

use heapless::{Deque, Vec};

use crate::bus::SerialBus;
use crate::error::{FujiError, Result};

/// Capacity of the scripted receive queue and the transmit capture, in bytes.
const BUFFER_CAPACITY: usize = 256;

/// Maximum number of recorded `delay()` calls.
const DELAY_CAPACITY: usize = 64;

/// Mock serial bus for testing the link without real hardware.
///
/// This mock allows you to:
/// - Script bytes that will be returned by `read_byte()`, in FIFO order
/// - Inspect bytes written via `write_all()`
/// - Control time: the virtual clock only moves through `advance()` and
///   `delay()`
/// - Simulate write failures
///
/// Bytes pushed past the internal capacity (256) are dropped silently; size
/// test scripts accordingly.
#[derive(Debug, Default)]
pub struct MockBus {
    /// Scripted bytes returned by read_byte()
    rx: Deque<u8, BUFFER_CAPACITY>,
    /// Bytes captured from write_all()
    sent: Vec<u8, BUFFER_CAPACITY>,
    /// Record of every delay() call, in order
    delays: Vec<Duration, DELAY_CAPACITY>,
    /// Virtual monotonic clock
    clock: Duration,
    /// When set, write_all() fails without capturing anything
    fail_writes: bool,
    /// Number of flush() calls observed
    flush_count: usize,
}

impl MockBus {
    /// Create a mock bus with an empty script and the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a single received byte.
    pub fn push_byte(&mut self, byte: u8) {
        let _ = self.rx.push_back(byte);
    }

    /// Script a run of received bytes, preserving order.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_byte(byte);
        }
    }

    /// All bytes written so far, in write order.
    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    /// Clear the captured written bytes.
    ///
    /// Useful for resetting state between test phases.
    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Every `delay()` call observed so far, in order.
    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// Sum of all recorded delays.
    pub fn total_delay(&self) -> Duration {
        self.delays.iter().sum()
    }

    /// Current value of the virtual clock.
    pub const fn clock(&self) -> Duration {
        self.clock
    }

    /// Move the virtual clock forward without recording a delay.
    ///
    /// Models time passing outside the driver, e.g. between host update
    /// cycles.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
    }

    /// Make subsequent `write_all()` calls fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of `flush()` calls observed.
    pub const fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Number of scripted bytes not yet read.
    pub fn unread(&self) -> usize {
        self.rx.len()
    }
}

impl SerialBus for MockBus {
    fn available(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(FujiError::WriteFailed);
        }
        if self.sent.extend_from_slice(data).is_err() {
            return Err(FujiError::BufferTooSmall);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_count += 1;
        Ok(())
    }

    fn now(&self) -> Duration {
        self.clock
    }

    fn delay(&mut self, duration: Duration) {
        self.clock += duration;
        let _ = self.delays.push(duration);
    }
}
