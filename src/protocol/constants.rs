//! Protocol constants for the heat pump serial link.
//!
//! Values observed on the three-wire wired-controller bus of Fujitsu indoor
//! units. The protocol is reverse-engineered; the ranges below are the ones
//! the units actually produce and accept, pinned by the codec tests.

use core::time::Duration;

// =============================================================================
// Frame Markers
// =============================================================================

/// First byte of every frame
pub const SYNC_MARKER: u8 = 0xFE;

/// Trailing byte of every valid inbound frame.
///
/// Outbound frames carry an additive checksum in this position instead; the
/// unit does not close commands with the marker.
pub const END_MARKER: u8 = 0xEB;

/// Fixed frame length in bytes
pub const FRAME_LEN: usize = 8;

// =============================================================================
// Addresses
// =============================================================================

/// Source address of the primary wired controller
pub const PRIMARY_ADDRESS: u8 = 0x00;

/// Source address of the secondary wired controller
pub const SECONDARY_ADDRESS: u8 = 0x01;

// =============================================================================
// Temperature Encoding
// =============================================================================

/// Offset added to the raw setpoint field to obtain °C
pub const SETPOINT_OFFSET_C: u8 = 16;

/// Highest valid raw setpoint value (raw 14 = 30 °C)
pub const SETPOINT_RAW_MAX: u8 = 14;

/// Lowest selectable setpoint in °C
pub const SETPOINT_MIN_C: f32 = 16.0;

/// Highest selectable setpoint in °C
pub const SETPOINT_MAX_C: f32 = 30.0;

/// Setpoint assumed before the unit has reported one
pub const DEFAULT_SETPOINT_C: f32 = 22.0;

/// Setpoint changes smaller than this count as no change
pub const SETPOINT_EPSILON_C: f32 = 0.1;

/// Highest plausible reported room temperature, in whole °C
pub const ROOM_TEMP_MAX_C: u8 = 50;

// =============================================================================
// Bus Timing
// =============================================================================

/// Minimum quiet time between receiving a frame and replying.
///
/// The indoor unit transmits on a fixed cadence; driving the line earlier
/// than this risks a collision on the shared half-duplex pair.
pub const REPLY_DELAY: Duration = Duration::from_millis(60);

/// Idle sleep between polls while blocking on frame acquisition
pub const IDLE_POLL: Duration = Duration::from_millis(1);
