//! Serial link protocol implementation.
//!
//! This module contains the core protocol structures and logic for the
//! indoor unit's three-wire bus: frame layout, byte-stream
//! synchronization, the field codec and outbound scheduling.

pub mod codec;
pub mod constants;
pub mod frame;
pub mod scheduler;
pub mod sync;

pub use codec::*;
pub use constants::*;
pub use frame::*;
pub use scheduler::*;
pub use sync::*;
