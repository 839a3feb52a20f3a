//! Climate state model and the raw protocol enumerations.
//!
//! The numeric values on the enums are the codes carried on the wire. Decode
//! is total: codes with no assigned meaning fall back to `Unknown` (modes)
//! or `Auto` (fan speeds) instead of failing, since the control loop must
//! keep running on whatever the unit reports.

use crate::protocol::constants::{DEFAULT_SETPOINT_C, PRIMARY_ADDRESS, SECONDARY_ADDRESS};

/// Controller role on the shared bus.
///
/// The indoor unit distinguishes its primary wired controller from an
/// optional secondary one by source address; the role fixes the address byte
/// on every transmitted frame. A retrofit controller running alongside the
/// stock remote takes the secondary role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ControllerRole {
    /// Primary wired controller
    Primary = PRIMARY_ADDRESS,
    /// Secondary wired controller
    #[default]
    Secondary = SECONDARY_ADDRESS,
}

impl ControllerRole {
    /// Source address byte carried by transmitted frames.
    #[inline(always)]
    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// Operating mode of the indoor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OperatingMode {
    /// Reported before the first status frame, or for unassigned codes
    Unknown = 0,
    /// Fan only, no heating or cooling
    Fan = 1,
    /// Dehumidify
    Dry = 2,
    /// Cooling
    Cool = 3,
    /// Heating
    Heat = 4,
    /// Unit chooses heating or cooling by itself
    #[default]
    Auto = 5,
}

impl OperatingMode {
    /// Decode a raw 3-bit mode code.
    ///
    /// Codes without an assigned meaning decode to [`OperatingMode::Unknown`].
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            1 => Self::Fan,
            2 => Self::Dry,
            3 => Self::Cool,
            4 => Self::Heat,
            5 => Self::Auto,
            _ => Self::Unknown,
        }
    }

    /// Raw protocol code.
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

/// Fan speed setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FanSpeed {
    /// Unit manages the fan speed
    #[default]
    Auto = 0,
    /// Lowest audible setting
    Quiet = 1,
    /// Low
    Low = 2,
    /// Medium
    Medium = 3,
    /// High
    High = 4,
}

impl FanSpeed {
    /// Decode a raw 3-bit fan code.
    ///
    /// Codes without an assigned meaning decode to [`FanSpeed::Auto`].
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            1 => Self::Quiet,
            2 => Self::Low,
            3 => Self::Medium,
            4 => Self::High,
            _ => Self::Auto,
        }
    }

    /// Raw protocol code.
    #[inline(always)]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }
}

/// Operating state of the heat pump as seen by this controller.
///
/// One struct holds both what the unit last reported and what the local
/// controller has requested: setters apply changes immediately, and the next
/// decoded status frame confirms (or corrects) them field by field. The two
/// views may diverge for the moment between staging a command and the unit
/// acknowledging it on the bus.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatPumpState {
    /// Power state
    pub on_off: bool,
    /// Operating mode
    pub mode: OperatingMode,
    /// Fan speed
    pub fan: FanSpeed,
    /// Requested setpoint in °C, 16.0 to 30.0
    pub target_temperature: f32,
    /// Last reported room temperature in °C, 0.0 to 50.0
    pub current_temperature: f32,
}

impl HeatPumpState {
    /// State assumed before the first frame has been decoded.
    ///
    /// Matches the defaults a factory-fresh wired controller displays: off,
    /// automatic mode and fan, both temperatures at a mild 22 °C.
    pub const fn initial() -> Self {
        Self {
            on_off: false,
            mode: OperatingMode::Auto,
            fan: FanSpeed::Auto,
            target_temperature: DEFAULT_SETPOINT_C,
            current_temperature: DEFAULT_SETPOINT_C,
        }
    }
}

impl Default for HeatPumpState {
    fn default() -> Self {
        Self::initial()
    }
}
