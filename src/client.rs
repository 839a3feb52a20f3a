//! High-level heat pump controller client.
//!
//! [`HeatPumpClient`] owns one serial bus and plays the role of a wired
//! wall controller: it listens to the status frames the indoor unit sends
//! continuously, mirrors them into a [`HeatPumpState`], and turns setting
//! changes into command frames transmitted inside the unit's reply window.
//!
//! The client is single-threaded and non-blocking apart from
//! [`wait_inbound`](HeatPumpClient::wait_inbound) and the quiet-period wait
//! inside [`try_send_pending`](HeatPumpClient::try_send_pending). A typical
//! control loop calls [`poll_inbound`](HeatPumpClient::poll_inbound) and
//! `try_send_pending` once per cycle.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use fujilink::bus::MockBus;
//! use fujilink::{ControllerRole, HeatPumpClient, OperatingMode};
//!
//! let mut bus = MockBus::new();
//! bus.push_bytes(&[0xFE, 0x00, 0x00, 0x05, 0x05, 0x00, 0x2D, 0xEB]);
//!
//! let mut client = HeatPumpClient::new();
//! client.attach(bus, ControllerRole::Secondary);
//!
//! // Mirror the unit's status
//! assert!(client.wait_inbound(Duration::from_millis(100)));
//! assert_eq!(client.mode(), OperatingMode::Dry);
//! assert_eq!(client.target_temperature(), 21.0);
//! assert_eq!(client.current_temperature(), 22.0);
//!
//! // Request a change; the frame goes out after the quiet period
//! client.set_target_temperature(24.0);
//! assert!(client.try_send_pending());
//! assert!(!client.has_pending());
//! ```

use core::time::Duration;

use crate::bus::SerialBus;
use crate::protocol::codec;
use crate::protocol::constants::{IDLE_POLL, SETPOINT_EPSILON_C, SETPOINT_MAX_C, SETPOINT_MIN_C};
use crate::protocol::scheduler::TxScheduler;
use crate::protocol::sync::FrameSync;
use crate::state::{ControllerRole, FanSpeed, HeatPumpState, OperatingMode};

/// Wired-controller client for one indoor unit.
///
/// Starts detached; every operation is a silent no-op until a bus is
/// supplied with [`attach`](Self::attach). This lets a controller
/// application construct its full object graph before the port exists and
/// keep running in a degraded mode when the link is unavailable.
#[derive(Debug)]
pub struct HeatPumpClient<B: SerialBus> {
    bus: Option<B>,
    role: ControllerRole,
    state: HeatPumpState,
    sync: FrameSync,
    tx: TxScheduler,
}

impl<B: SerialBus> Default for HeatPumpClient<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SerialBus> HeatPumpClient<B> {
    /// Create a detached client with default state.
    pub const fn new() -> Self {
        Self {
            bus: None,
            role: ControllerRole::Secondary,
            state: HeatPumpState::initial(),
            sync: FrameSync::new(),
            tx: TxScheduler::new(),
        }
    }

    /// Attach the serial bus and take on the given controller role.
    ///
    /// State accumulated while detached is kept; a fresh status frame
    /// overwrites it within one bus cycle anyway.
    pub fn attach(&mut self, bus: B, role: ControllerRole) {
        fuji_log!(info, "bus attached, sender address {:02x}", role.address());
        self.bus = Some(bus);
        self.role = role;
    }

    /// True once a bus has been attached.
    pub const fn is_attached(&self) -> bool {
        self.bus.is_some()
    }

    /// Drain buffered bytes and apply at most one complete status frame.
    ///
    /// Returns `true` when a frame was applied. Bytes past that frame stay
    /// buffered for the next call, so back-to-back frames are delivered one
    /// per call in arrival order.
    pub fn poll_inbound(&mut self) -> bool {
        let Some(bus) = self.bus.as_mut() else {
            return false;
        };
        Self::poll_step(bus, &mut self.sync, &mut self.tx, &mut self.state)
    }

    /// Block until a status frame arrives or `timeout` elapses.
    ///
    /// Returns `true` when a frame was applied. Used at startup to acquire
    /// the unit's state before the first command is allowed out.
    pub fn wait_inbound(&mut self, timeout: Duration) -> bool {
        let Some(bus) = self.bus.as_mut() else {
            return false;
        };
        let deadline = bus.now() + timeout;
        loop {
            if bus.available()
                && Self::poll_step(bus, &mut self.sync, &mut self.tx, &mut self.state)
            {
                return true;
            }
            if bus.now() >= deadline {
                fuji_log!(warn, "no inbound frame within {} ms", timeout.as_millis() as u32);
                return false;
            }
            bus.delay(IDLE_POLL);
        }
    }

    /// Request the unit be switched on or off.
    pub fn set_power(&mut self, on: bool) {
        if !self.is_attached() || self.state.on_off == on {
            return;
        }
        self.state.on_off = on;
        self.stage_command();
    }

    /// Request an operating mode change.
    pub fn set_mode(&mut self, mode: OperatingMode) {
        if !self.is_attached() || self.state.mode == mode {
            return;
        }
        self.state.mode = mode;
        self.stage_command();
    }

    /// Request a fan speed change.
    pub fn set_fan_mode(&mut self, fan: FanSpeed) {
        if !self.is_attached() || self.state.fan == fan {
            return;
        }
        self.state.fan = fan;
        self.stage_command();
    }

    /// Request a new target temperature in degrees Celsius.
    ///
    /// The value is clamped to the unit's selectable range. Requests within
    /// a tenth of a degree of the current target are dropped, which filters
    /// the float jitter dashboards tend to produce.
    pub fn set_target_temperature(&mut self, celsius: f32) {
        if !self.is_attached() {
            return;
        }
        let clamped = celsius.clamp(SETPOINT_MIN_C, SETPOINT_MAX_C);
        let delta = clamped - self.state.target_temperature;
        if delta > -SETPOINT_EPSILON_C && delta < SETPOINT_EPSILON_C {
            return;
        }
        self.state.target_temperature = clamped;
        self.stage_command();
    }

    /// Transmit the staged command frame, if any.
    ///
    /// Blocks for the remainder of the reply window first. Returns `true`
    /// when the frame left the port; on a write error the frame stays
    /// staged so the next call retries it.
    pub fn try_send_pending(&mut self) -> bool {
        let Some(bus) = self.bus.as_mut() else {
            return false;
        };
        let Some(frame) = self.tx.pending() else {
            return false;
        };

        let wait = self.tx.required_delay(bus.now());
        if !wait.is_zero() {
            bus.delay(wait);
        }
        match bus.write_all(frame.as_bytes()).and_then(|()| bus.flush()) {
            Ok(()) => {
                self.tx.clear();
                fuji_log!(info, "command frame sent");
                true
            }
            Err(err) => {
                fuji_log!(error, "command write failed: {}", err);
                false
            }
        }
    }

    /// Whether the unit is reported (or requested) on.
    pub const fn power(&self) -> bool {
        self.state.on_off
    }

    /// Current operating mode.
    pub const fn mode(&self) -> OperatingMode {
        self.state.mode
    }

    /// Current fan speed setting.
    pub const fn fan_mode(&self) -> FanSpeed {
        self.state.fan
    }

    /// Target temperature in degrees Celsius.
    pub const fn target_temperature(&self) -> f32 {
        self.state.target_temperature
    }

    /// Last plausible room temperature report in degrees Celsius.
    pub const fn current_temperature(&self) -> f32 {
        self.state.current_temperature
    }

    /// True while a command frame is staged for transmission.
    pub const fn has_pending(&self) -> bool {
        self.tx.has_pending()
    }

    /// The role this controller signs outbound frames with.
    pub const fn role(&self) -> ControllerRole {
        self.role
    }

    /// The full mirrored state.
    pub const fn state(&self) -> &HeatPumpState {
        &self.state
    }

    /// Borrow the attached bus, for instance to reconfigure the port.
    pub fn bus(&self) -> Option<&B> {
        self.bus.as_ref()
    }

    /// Mutably borrow the attached bus.
    pub fn bus_mut(&mut self) -> Option<&mut B> {
        self.bus.as_mut()
    }

    /// Encode the current state and stage it, replacing any staged frame.
    fn stage_command(&mut self) {
        let frame = codec::encode(&self.state, self.role);
        fuji_log!(
            debug,
            "command staged: power {} mode {} fan {} target {}",
            u8::from(self.state.on_off),
            self.state.mode.to_bits(),
            self.state.fan.to_bits(),
            self.state.target_temperature
        );
        self.tx.stage(frame);
    }

    /// Shared poll body over disjoint borrows of the client's fields.
    fn poll_step(
        bus: &mut B,
        sync: &mut FrameSync,
        tx: &mut TxScheduler,
        state: &mut HeatPumpState,
    ) -> bool {
        while let Some(byte) = bus.read_byte() {
            if let Some(frame) = sync.push(byte) {
                tx.mark_received(bus.now());
                codec::decode(&frame, state);
                fuji_log!(
                    debug,
                    "status: power {} mode {} fan {} target {} room {}",
                    u8::from(state.on_off),
                    state.mode.to_bits(),
                    state.fan.to_bits(),
                    state.target_temperature,
                    state.current_temperature
                );
                return true;
            }
        }
        false
    }
}
