//! Error types for heat pump link operations.
//!
//! Nothing on this bus is fatal: a controller has to keep running through
//! line noise, missing frames and even absent hardware. The variants here
//! exist for the `Result` seams (frame validation, bus writes); the
//! client-facing calls fold them into boolean results and carry on with
//! possibly-stale state.

use core::fmt;

/// Result type alias for heat pump link operations.
pub type Result<T> = core::result::Result<T, FujiError>;

/// Heat pump link error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FujiError {
    /// Fewer bytes than a full frame were provided
    FrameTooShort,
    /// Trailing byte of an inbound frame was not the end marker
    EndMarkerMismatch,
    /// Destination buffer cannot hold an encoded frame
    BufferTooSmall,
    /// The serial write could not complete
    WriteFailed,
    /// A bus operation exceeded its deadline
    Timeout,
}

impl FujiError {
    /// Check if this is a framing error (short frame or bad end marker)
    pub const fn is_framing(&self) -> bool {
        matches!(self, Self::FrameTooShort | Self::EndMarkerMismatch)
    }

    /// Check if this is a timeout
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl fmt::Display for FujiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FujiError::FrameTooShort => write!(f, "frame shorter than 8 bytes"),
            FujiError::EndMarkerMismatch => write!(f, "inbound frame missing end marker"),
            FujiError::BufferTooSmall => write!(f, "buffer too small for frame"),
            FujiError::WriteFailed => write!(f, "serial write failed"),
            FujiError::Timeout => write!(f, "bus operation timed out"),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for FujiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_predicate() {
        assert!(FujiError::FrameTooShort.is_framing());
        assert!(FujiError::EndMarkerMismatch.is_framing());
        assert!(!FujiError::Timeout.is_framing());
    }

    #[test]
    fn test_display_messages() {
        let rendered = format!("{}", FujiError::EndMarkerMismatch);
        assert!(rendered.contains("end marker"));
        assert!(format!("{}", FujiError::WriteFailed).contains("write"));
    }
}
