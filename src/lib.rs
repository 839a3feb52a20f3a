#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # fujilink
//!
//! Serial link protocol driver for Fujitsu heat pump indoor units.
//!
//! This crate provides a `no_std` implementation of the frame protocol spoken
//! on the three-wire wired-controller bus of Fujitsu heat pumps, designed to
//! run inside a host integration's periodic update cycle on embedded
//! microcontrollers.
//!
//! ## Features
//!
//! - Byte-stream frame synchronization with deterministic resync after noise
//! - Bit-accurate status decoding and command encoding
//! - Single-slot transmit scheduling honoring the bus reply window
//! - Transport-agnostic through the [`SerialBus`] trait
//! - Optional `defmt` or `log` logging backends
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::time::Duration;
//! use fujilink::bus::MockBus;
//! use fujilink::{ControllerRole, HeatPumpClient, OperatingMode};
//!
//! let mut hp = HeatPumpClient::new();
//! hp.attach(MockBus::new(), ControllerRole::Secondary);
//!
//! if hp.wait_inbound(Duration::from_secs(10)) {
//!     hp.set_mode(OperatingMode::Heat);
//!     hp.set_target_temperature(21.0);
//!     hp.try_send_pending();
//! }
//! ```

// Macro modules (must be declared before use)
#[macro_use]
pub mod logging;

pub mod bus;
pub mod client;
pub mod climate;
pub mod error;
pub mod protocol;
pub mod state;

// Re-export commonly used types
#[doc(inline)]
pub use bus::SerialBus;
#[doc(inline)]
pub use client::HeatPumpClient;
#[doc(inline)]
pub use error::{FujiError, Result};
#[doc(inline)]
pub use protocol::frame::Frame;
#[doc(inline)]
pub use state::{ControllerRole, FanSpeed, HeatPumpState, OperatingMode};
