//! Bit-accurate field codec between [`Frame`] and [`HeatPumpState`].
//!
//! Decode and encode are deliberately not mirror images. Inbound status
//! frames pack power, mode and fan into byte 3 and close with the end
//! marker; outbound command frames spread the same fields over bytes 2, 3
//! and 5 and close with a checksum instead. Both layouts follow the unit's
//! own framing, so a command frame fed back through [`decode`] would not
//! reproduce the state that built it.
//!
//! Decoding is total: a frame that passed end-marker validation always
//! yields a state update. Fields carrying out-of-range values are skipped
//! individually and the previous value stays in place.

use crate::protocol::constants::{
    FRAME_LEN, ROOM_TEMP_MAX_C, SETPOINT_MAX_C, SETPOINT_MIN_C, SETPOINT_OFFSET_C,
    SETPOINT_RAW_MAX, SYNC_MARKER,
};
use crate::protocol::frame::Frame;
use crate::state::{ControllerRole, FanSpeed, HeatPumpState, OperatingMode};

/// Truncating 8-bit sum over `data`.
///
/// Outbound frames carry this over their first seven bytes in the final
/// byte. Inbound frames are validated by end marker alone, so received
/// checksums are never recomputed.
pub fn checksum(data: &[u8]) -> u8 {
    let sum = data
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(u16::from(b)));
    (sum & 0xFF) as u8
}

/// Apply the fields of an inbound status frame to `state`.
///
/// Unassigned mode and fan codes map to their fallback variants. The two
/// temperature fields are range-checked and left untouched when the frame
/// carries an invalid value, so `state` always holds the last plausible
/// reading.
pub fn decode(frame: &Frame, state: &mut HeatPumpState) {
    state.on_off = frame.power();
    state.mode = OperatingMode::from_bits(frame.mode_bits());
    state.fan = FanSpeed::from_bits(frame.fan_bits());

    let raw = frame.setpoint_raw();
    if raw <= SETPOINT_RAW_MAX {
        state.target_temperature = f32::from(raw + SETPOINT_OFFSET_C);
    } else {
        fuji_log!(warn, "setpoint raw {} out of range, keeping previous", raw);
    }

    if frame.controller_present() {
        let raw = frame.room_temp_raw();
        if raw <= ROOM_TEMP_MAX_C {
            state.current_temperature = f32::from(raw);
        } else {
            fuji_log!(warn, "room temp raw {} out of range, keeping previous", raw);
        }
    }
}

/// Build an outbound command frame from `state`.
///
/// Byte 1 carries the sender address for `role` so the indoor unit can tell
/// which controller issued the command.
pub fn encode(state: &HeatPumpState, role: ControllerRole) -> Frame {
    let mut bytes = [0u8; FRAME_LEN];
    bytes[0] = SYNC_MARKER;
    bytes[1] = role.address();
    bytes[2] = u8::from(state.on_off);
    bytes[3] = state.mode.to_bits();
    bytes[4] = setpoint_to_raw(state.target_temperature);
    bytes[5] = state.fan.to_bits();
    bytes[7] = checksum(&bytes[..FRAME_LEN - 1]);
    Frame::from_bytes(bytes)
}

/// Convert a setpoint in degrees Celsius to its wire representation.
///
/// Values outside the unit's accepted range land on the nearest bound.
fn setpoint_to_raw(celsius: f32) -> u8 {
    let clamped = celsius.clamp(SETPOINT_MIN_C, SETPOINT_MAX_C);
    ((clamped - SETPOINT_MIN_C) as i32).clamp(0, i32::from(SETPOINT_RAW_MAX)) as u8
}
