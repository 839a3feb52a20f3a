//! Frame layout and validation for the heat pump link.
//!
//! ## Frame Structure
//!
//! Every exchange on the bus is a fixed 8-byte frame:
//!
//! ```text
//! ┌──────┬────────────────────────────────────────────────────┐
//! │ Byte │ Content                                            │
//! ├──────┼────────────────────────────────────────────────────┤
//! │  0   │ Sync marker (0xFE)                                 │
//! │  1   │ Source / controller address                        │
//! │  2   │ Destination address and flags                      │
//! │  3   │ bit0 power, bits1-3 mode, bits4-6 fan              │
//! │  4   │ bits0-6 raw setpoint, bit7 economy                 │
//! │  5   │ Reserved / swing flags                             │
//! │  6   │ bit0 controller present, bits1-6 room temperature  │
//! │  7   │ End marker (0xEB) inbound, checksum outbound       │
//! └──────┴────────────────────────────────────────────────────┘
//! ```
//!
//! Inbound frames are validated only by the fixed end marker; the checksum
//! in byte 7 exists only on frames this controller transmits. The accessor
//! methods here read the inbound bit layout; command frames use a different
//! one (see the codec module).
//!
//! ## Example
//!
//! ```rust
//! use fujilink::protocol::frame::Frame;
//!
//! let frame = Frame::parse(&[0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEB])?;
//! assert!(frame.power());
//! assert_eq!(frame.setpoint_raw(), 5);
//! # Ok::<(), fujilink::FujiError>(())
//! ```

use core::fmt;

use crate::error::{FujiError, Result};
use crate::protocol::constants::{END_MARKER, FRAME_LEN};

/// An 8-byte link frame.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; FRAME_LEN],
}

impl Frame {
    /// Size of a frame in bytes
    pub const LEN: usize = FRAME_LEN;

    /// Wrap raw bytes without end-marker validation.
    ///
    /// For bytes that are already validated (the synchronizer checks the end
    /// marker before handing a window over) or where the check does not
    /// apply (outbound frames carry a checksum in the trailing byte).
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    /// Parse and validate an inbound frame from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`FujiError::FrameTooShort`] if fewer than 8 bytes are given,
    /// [`FujiError::EndMarkerMismatch`] if byte 7 is not the end marker.
    /// Neither case consumes or alters anything.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FRAME_LEN {
            return Err(FujiError::FrameTooShort);
        }
        if data[FRAME_LEN - 1] != END_MARKER {
            return Err(FujiError::EndMarkerMismatch);
        }
        let mut bytes = [0u8; FRAME_LEN];
        bytes.copy_from_slice(&data[..FRAME_LEN]);
        Ok(Self { bytes })
    }

    /// Raw frame bytes.
    #[inline(always)]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Source / controller address (byte 1).
    #[inline(always)]
    pub const fn source(&self) -> u8 {
        self.bytes[1]
    }

    /// Power bit (byte 3, bit 0).
    #[inline(always)]
    pub const fn power(&self) -> bool {
        self.bytes[3] & 0x01 != 0
    }

    /// Raw 3-bit mode code (byte 3, bits 1-3).
    #[inline(always)]
    pub const fn mode_bits(&self) -> u8 {
        (self.bytes[3] & 0x0E) >> 1
    }

    /// Raw 3-bit fan code (byte 3, bits 4-6).
    #[inline(always)]
    pub const fn fan_bits(&self) -> u8 {
        (self.bytes[3] & 0x70) >> 4
    }

    /// Raw setpoint value (byte 4, bits 0-6).
    #[inline(always)]
    pub const fn setpoint_raw(&self) -> u8 {
        self.bytes[4] & 0x7F
    }

    /// Economy flag (byte 4, bit 7). Carried but not interpreted.
    #[inline(always)]
    pub const fn economy(&self) -> bool {
        self.bytes[4] & 0x80 != 0
    }

    /// Controller-present flag (byte 6, bit 0).
    ///
    /// The room temperature field is only meaningful while this is set.
    #[inline(always)]
    pub const fn controller_present(&self) -> bool {
        self.bytes[6] & 0x01 != 0
    }

    /// Raw room temperature in whole °C (byte 6, bits 1-6).
    #[inline(always)]
    pub const fn room_temp_raw(&self) -> u8 {
        (self.bytes[6] & 0x7E) >> 1
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[")?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_frame() {
        let data = [0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEB];
        let frame = Frame::parse(&data).unwrap();
        assert_eq!(frame.as_bytes(), &data);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert_eq!(Frame::parse(&[]), Err(FujiError::FrameTooShort));
        assert_eq!(
            Frame::parse(&[0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01]),
            Err(FujiError::FrameTooShort)
        );
    }

    #[test]
    fn test_parse_rejects_missing_end_marker() {
        let data = [0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEC];
        assert_eq!(Frame::parse(&data), Err(FujiError::EndMarkerMismatch));
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        // Only the first 8 bytes form the frame
        let data = [0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEB, 0xFF, 0xFF];
        let frame = Frame::parse(&data).unwrap();
        assert_eq!(frame.as_bytes()[7], 0xEB);
    }

    #[test]
    fn test_status_field_extraction() {
        // Power on, mode code 2, fan code 0, setpoint raw 5,
        // controller present with room raw 0
        let frame = Frame::from_bytes([0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEB]);
        assert!(frame.power());
        assert_eq!(frame.mode_bits(), 2);
        assert_eq!(frame.fan_bits(), 0);
        assert_eq!(frame.setpoint_raw(), 5);
        assert!(!frame.economy());
        assert!(frame.controller_present());
        assert_eq!(frame.room_temp_raw(), 0);
    }

    #[test]
    fn test_packed_control_byte_extraction() {
        // byte 3 = 0b0100_1001: power on, mode 4 (heat), fan 4 (high)
        let frame = Frame::from_bytes([0xFE, 0x01, 0x00, 0x49, 0x0E, 0x00, 0x2D, 0xEB]);
        assert!(frame.power());
        assert_eq!(frame.mode_bits(), 4);
        assert_eq!(frame.fan_bits(), 4);
        // byte 6 = 0b0010_1101: present, room raw 22
        assert!(frame.controller_present());
        assert_eq!(frame.room_temp_raw(), 22);
        assert_eq!(frame.source(), 0x01);
    }

    #[test]
    fn test_economy_and_setpoint_share_byte_4() {
        let frame = Frame::from_bytes([0xFE, 0x00, 0x00, 0x01, 0x8E, 0x00, 0x00, 0xEB]);
        assert!(frame.economy());
        assert_eq!(frame.setpoint_raw(), 14);
    }

    #[test]
    fn test_debug_renders_hex() {
        let frame = Frame::from_bytes([0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x01, 0xEB]);
        let rendered = format!("{frame:?}");
        assert_eq!(rendered, "Frame[FE 00 00 05 05 00 01 EB]");
    }
}
