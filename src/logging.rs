//! Unified logging macros for the link driver.
//!
//! This module provides a single logging interface that selects between
//! `log::` and `defmt::` based on the active feature flags. With neither
//! backend enabled, every statement compiles to a no-op while still
//! consuming its arguments.
//!
//! # Usage
//!
//! ```rust,ignore
//! fuji_log!(info, "link attached");
//! fuji_log!(debug, "status frame decoded, setpoint {}", target);
//! fuji_log!(warn, "end marker mismatch ({:02x})", byte);
//! ```
//!
//! # Feature Flags
//!
//! - `log` - Uses the `log` crate (host-side builds)
//! - `defmt` - Uses `defmt` (RTT logging on embedded targets)
//! - neither - No-op
//!
//! Call sites stick to format specifiers both backends accept (`{}` on
//! primitives and `Display`+`Format` types, `{:02x}` style hex hints).

/// Unified logging macro - selects log:: or defmt:: based on features
#[macro_export]
#[cfg(feature = "log")]
macro_rules! fuji_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! fuji_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! fuji_log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {{
        $( let _ = &$x; )*
    }};
}
