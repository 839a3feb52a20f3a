//! Thermostat-facing view of the link state.
//!
//! Home automation frontends model a climate device with a single mode
//! axis where "off" is a mode, while the unit itself keeps power and
//! operating mode separate. This module provides the enums of that outer
//! model and the total conversions between the two, so integration crates
//! do not each repeat the folding rules.
//!
//! The conversions are pure functions over [`HeatPumpState`] values rather
//! than methods on the client; a frontend typically snapshots the state
//! once per publish cycle and derives everything from the copy.

use crate::state::{FanSpeed, HeatPumpState, OperatingMode};

/// Mode axis of a thermostat frontend, with `Off` folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClimateMode {
    /// Unit is powered down
    Off,
    /// Unit chooses heating or cooling itself
    #[default]
    Auto,
    /// Active cooling
    Cool,
    /// Active heating
    Heat,
    /// Dehumidification
    Dry,
    /// Air circulation without conditioning
    FanOnly,
}

/// Fan axis of a thermostat frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClimateFanMode {
    /// Unit manages the fan speed
    #[default]
    Auto,
    /// Lowest, quietest setting
    Quiet,
    /// Low speed
    Low,
    /// Medium speed
    Medium,
    /// High speed
    High,
}

/// What the unit is currently doing, as frontends display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClimateAction {
    /// Powered down
    #[default]
    Off,
    /// Powered but not actively conditioning
    Idle,
    /// Heating
    Heating,
    /// Cooling
    Cooling,
    /// Dehumidifying
    Drying,
    /// Circulating air only
    Fan,
}

/// Fold power and operating mode into the frontend's single mode axis.
///
/// Power always wins: a unit that is off reports `Off` whatever mode it
/// would run in. An unrecognized mode code surfaces as `Auto`, the least
/// misleading of the selectable modes.
pub const fn climate_mode(state: &HeatPumpState) -> ClimateMode {
    if !state.on_off {
        return ClimateMode::Off;
    }
    match state.mode {
        OperatingMode::Unknown | OperatingMode::Auto => ClimateMode::Auto,
        OperatingMode::Fan => ClimateMode::FanOnly,
        OperatingMode::Dry => ClimateMode::Dry,
        OperatingMode::Cool => ClimateMode::Cool,
        OperatingMode::Heat => ClimateMode::Heat,
    }
}

/// Unfold a frontend mode into an operating mode.
///
/// `Off` has no operating-mode counterpart; the caller switches power off
/// instead and leaves the unit's mode untouched.
pub const fn operating_mode(mode: ClimateMode) -> Option<OperatingMode> {
    match mode {
        ClimateMode::Off => None,
        ClimateMode::Auto => Some(OperatingMode::Auto),
        ClimateMode::Cool => Some(OperatingMode::Cool),
        ClimateMode::Heat => Some(OperatingMode::Heat),
        ClimateMode::Dry => Some(OperatingMode::Dry),
        ClimateMode::FanOnly => Some(OperatingMode::Fan),
    }
}

/// Map a link fan speed to the frontend fan axis.
pub const fn climate_fan_mode(fan: FanSpeed) -> ClimateFanMode {
    match fan {
        FanSpeed::Auto => ClimateFanMode::Auto,
        FanSpeed::Quiet => ClimateFanMode::Quiet,
        FanSpeed::Low => ClimateFanMode::Low,
        FanSpeed::Medium => ClimateFanMode::Medium,
        FanSpeed::High => ClimateFanMode::High,
    }
}

/// Map a frontend fan selection back to the link fan speed.
pub const fn fan_speed(fan: ClimateFanMode) -> FanSpeed {
    match fan {
        ClimateFanMode::Auto => FanSpeed::Auto,
        ClimateFanMode::Quiet => FanSpeed::Quiet,
        ClimateFanMode::Low => FanSpeed::Low,
        ClimateFanMode::Medium => FanSpeed::Medium,
        ClimateFanMode::High => FanSpeed::High,
    }
}

/// Derive the displayed action from the mirrored state.
///
/// The link does not report compressor activity, so the action is inferred
/// from mode alone. `Auto` shows `Idle` because the unit's own choice
/// between heating and cooling is not visible on the bus.
pub const fn climate_action(state: &HeatPumpState) -> ClimateAction {
    if !state.on_off {
        return ClimateAction::Off;
    }
    match state.mode {
        OperatingMode::Heat => ClimateAction::Heating,
        OperatingMode::Cool => ClimateAction::Cooling,
        OperatingMode::Dry => ClimateAction::Drying,
        OperatingMode::Fan => ClimateAction::Fan,
        OperatingMode::Auto | OperatingMode::Unknown => ClimateAction::Idle,
    }
}
