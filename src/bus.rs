//! Serial bus abstraction for the heat pump link.
//!
//! This module provides the [`SerialBus`] trait that abstracts the
//! half-duplex serial line and the board clock, enabling:
//! - Testability through the bundled [`MockBus`]
//! - Flexibility to support different ports (hardware UART, USB-serial, RS485
//!   transceivers on the three-wire bus)
//! - Dependency Inversion Principle compliance
//!
//! ## Design Pattern
//!
//! The protocol client depends only on this abstraction; board crates
//! implement it over their HAL of choice and both vary independently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fujilink::bus::MockBus;
//! use fujilink::{ControllerRole, HeatPumpClient};
//!
//! // Testing: use the mock bus with scripted bytes
//! let mut mock = MockBus::new();
//! mock.push_bytes(&[0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEB]);
//!
//! let mut hp = HeatPumpClient::new();
//! hp.attach(mock, ControllerRole::Secondary);
//! assert!(hp.poll_inbound());
//! ```

use core::time::Duration;

use crate::error::Result;

pub mod mock;

#[doc(inline)]
pub use mock::MockBus;

/// Half-duplex serial bus abstraction.
///
/// This trait is the full set of services the protocol client consumes:
/// buffered non-blocking reads, blocking bulk writes, and the board's
/// monotonic clock with a cooperative sleep. One implementation drives one
/// physical bus.
///
/// # Design Notes
///
/// The trait is kept minimal to support embedded constraints:
/// - No heap allocations in trait methods
/// - Byte-at-a-time reads, since frames carry no length prefix
/// - The clock lives here so protocol timing follows whatever time source
///   the board already has (SysTick, a timer peripheral, `std::time` on a
///   host)
pub trait SerialBus {
    /// Check whether at least one received byte is buffered.
    fn available(&mut self) -> bool;

    /// Read a single buffered byte without blocking.
    ///
    /// Returns `None` when the receive buffer is empty.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write all bytes to the line.
    ///
    /// # Errors
    ///
    /// Returns [`FujiError::WriteFailed`](crate::FujiError::WriteFailed) if
    /// the port rejects the write, or
    /// [`FujiError::Timeout`](crate::FujiError::Timeout) if the port stalls
    /// past the implementation's own deadline.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Block until previously written bytes have left the transmit buffer.
    ///
    /// The reply window is measured to the end of the transmission, so the
    /// client flushes every frame it sends.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`write_all`](Self::write_all).
    fn flush(&mut self) -> Result<()>;

    /// Monotonic clock with millisecond resolution.
    ///
    /// The epoch is arbitrary; only differences are meaningful. Must never
    /// go backwards.
    fn now(&self) -> Duration;

    /// Sleep for the given duration, yielding to the host's scheduler.
    ///
    /// Called with small bounded values: the idle interval between polls
    /// while waiting for a frame, and the remainder of the reply window
    /// before a transmit.
    fn delay(&mut self, duration: Duration);
}
