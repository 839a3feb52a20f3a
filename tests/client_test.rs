//! Integration tests for the fujilink library
//!
//! These tests drive the full client stack (synchronizer, codec, scheduler)
//! against the bundled mock bus, so they run hermetically:
//!
//! ```bash
//! cargo test --test client_test
//! ```
//!
//! The mock's clock is virtual; `delay()` advances it, which makes the
//! reply-window timing assertions exact.

use std::time::Duration;

// Only import types from the library crate
use fujilink::bus::MockBus;
use fujilink::client::HeatPumpClient;
use fujilink::state::{ControllerRole, FanSpeed, OperatingMode};

/// Unit status: power off, dry mode, fan auto, target 21 °C, room 22 °C
const STATUS_DRY: [u8; 8] = [0xFE, 0x00, 0x00, 0x04, 0x05, 0x00, 0x2D, 0xEB];

/// Unit status: power on, heat mode, fan high, target 30 °C, room 22 °C
const STATUS_HEAT: [u8; 8] = [0xFE, 0x00, 0x00, 0x49, 0x0E, 0x00, 0x2D, 0xEB];

const ACQUIRE_TIMEOUT: Duration = Duration::from_millis(200);

/// Helper to build an attached client with scripted inbound bytes
fn attached_with(bytes: &[u8]) -> HeatPumpClient<MockBus> {
    let mut bus = MockBus::new();
    bus.push_bytes(bytes);
    let mut client = HeatPumpClient::new();
    client.attach(bus, ControllerRole::Secondary);
    client
}

/// Helper to read the mock through the client
fn mock(client: &HeatPumpClient<MockBus>) -> &MockBus {
    client.bus().expect("client should be attached")
}

#[test]
fn test_initial_state_acquisition() {
    println!("\n=== Test: Initial State Acquisition ===");

    let mut client = attached_with(&STATUS_DRY);
    assert!(client.wait_inbound(ACQUIRE_TIMEOUT), "status frame expected");
    println!("✓ Status frame acquired");

    assert!(!client.power());
    assert_eq!(client.mode(), OperatingMode::Dry);
    assert_eq!(client.fan_mode(), FanSpeed::Auto);
    assert_eq!(client.target_temperature(), 21.0);
    assert_eq!(client.current_temperature(), 22.0);
    println!("✓ Mirrored state matches the frame");

    assert_eq!(mock(&client).unread(), 0);
    assert_eq!(mock(&client).clock(), Duration::ZERO);
    println!("✓ Acquisition consumed no virtual time");
}

#[test]
fn test_command_cycle_respects_reply_window() {
    println!("\n=== Test: Command Cycle Reply Window ===");

    let mut client = attached_with(&STATUS_DRY);
    assert!(client.wait_inbound(ACQUIRE_TIMEOUT));
    println!("✓ Status frame received at t=0");

    if let Some(bus) = client.bus_mut() {
        bus.advance(Duration::from_millis(10));
    }
    client.set_power(true);
    assert!(client.has_pending());
    println!("✓ Power-on command staged at t=10ms");

    assert!(client.try_send_pending());
    println!("✓ Command transmitted");

    // 50 ms of the 60 ms window remained at t=10ms
    assert_eq!(mock(&client).delays(), &[Duration::from_millis(50)]);
    assert_eq!(mock(&client).clock(), Duration::from_millis(60));
    println!("✓ Remaining quiet period of 50ms was honored");

    assert_eq!(
        mock(&client).sent(),
        &[0xFE, 0x01, 0x01, 0x02, 0x05, 0x00, 0x00, 0x07]
    );
    assert_eq!(mock(&client).flush_count(), 1);
    println!("✓ Wire bytes carry sender address, power bit and checksum");

    assert!(!client.has_pending());
    assert!(!client.try_send_pending(), "slot should be empty after send");
    assert_eq!(
        mock(&client).delays(),
        &[Duration::from_millis(50)],
        "empty-slot call must not wait"
    );
    println!("✓ Staged slot cleared after transmission");
}

#[test]
fn test_resync_after_line_noise() {
    println!("\n=== Test: Resynchronization After Noise ===");

    // A spurious sync byte inside the noise swallows the first real frame;
    // the synchronizer recovers on the second.
    let mut stream = vec![0x11, 0xFE, 0x22];
    stream.extend_from_slice(&STATUS_DRY);
    stream.extend_from_slice(&STATUS_HEAT);

    let mut client = attached_with(&stream);
    assert!(client.poll_inbound(), "second frame should survive the noise");
    println!("✓ Frame recovered after corrupted window");

    assert!(client.power());
    assert_eq!(client.mode(), OperatingMode::Heat);
    assert_eq!(client.fan_mode(), FanSpeed::High);
    assert_eq!(client.target_temperature(), 30.0);
    println!("✓ State comes from the surviving frame");

    assert_eq!(mock(&client).unread(), 0);
    assert!(!client.poll_inbound());
    println!("✓ Stream fully drained");
}

#[test]
fn test_wait_inbound_times_out_on_silent_bus() {
    println!("\n=== Test: Acquisition Timeout ===");

    let mut client = attached_with(&[]);
    let timeout = Duration::from_millis(50);
    assert!(!client.wait_inbound(timeout));
    println!("✓ wait_inbound returned false");

    // The wait burned virtual time in idle-poll steps
    assert!(mock(&client).clock() >= timeout);
    assert!(!mock(&client).delays().is_empty());
    println!("✓ Timeout elapsed on the virtual clock");
}

#[test]
fn test_write_failure_keeps_command_pending() {
    println!("\n=== Test: Write Failure Retry ===");

    let mut client = attached_with(&[]);
    client.set_fan_mode(FanSpeed::High);
    assert!(client.has_pending());

    if let Some(bus) = client.bus_mut() {
        bus.set_fail_writes(true);
    }
    assert!(!client.try_send_pending());
    assert!(client.has_pending(), "frame must stay staged after a failure");
    assert!(mock(&client).sent().is_empty());
    println!("✓ Failed write left the command staged");

    if let Some(bus) = client.bus_mut() {
        bus.set_fail_writes(false);
    }
    assert!(client.try_send_pending());
    assert!(!client.has_pending());
    assert_eq!(
        mock(&client).sent(),
        &[0xFE, 0x01, 0x00, 0x05, 0x06, 0x04, 0x00, 0x0E]
    );
    println!("✓ Retry transmitted the same command");
}

#[test]
fn test_rapid_settings_collapse_into_one_frame() {
    println!("\n=== Test: Rapid Settings Collapse ===");

    let mut client = attached_with(&STATUS_DRY);
    assert!(client.wait_inbound(ACQUIRE_TIMEOUT));

    client.set_power(true);
    client.set_mode(OperatingMode::Cool);
    client.set_fan_mode(FanSpeed::Quiet);
    client.set_target_temperature(26.0);
    assert!(client.has_pending());
    println!("✓ Four changes staged");

    assert!(client.try_send_pending());
    let sent = mock(&client).sent();
    assert_eq!(sent.len(), 8, "one frame carries all changes");
    assert_eq!(sent, &[0xFE, 0x01, 0x01, 0x03, 0x0A, 0x01, 0x00, 0x0E]);
    println!("✓ Single frame reflects the final values");

    assert!(!client.try_send_pending());
    println!("✓ Nothing further to transmit");
}

#[test]
fn test_out_of_range_fields_keep_previous_values() {
    println!("\n=== Test: Stale Values Survive Invalid Fields ===");

    let mut client = attached_with(&STATUS_DRY);
    assert!(client.poll_inbound());
    assert_eq!(client.target_temperature(), 21.0);
    assert_eq!(client.current_temperature(), 22.0);

    // Same unit state but with garbage temperature fields
    if let Some(bus) = client.bus_mut() {
        bus.push_bytes(&[0xFE, 0x00, 0x00, 0x49, 0x7F, 0x00, 0x7F, 0xEB]);
    }
    assert!(client.poll_inbound());
    println!("✓ Frame with out-of-range temperatures still applied");

    assert!(client.power());
    assert_eq!(client.mode(), OperatingMode::Heat);
    assert_eq!(client.target_temperature(), 21.0);
    assert_eq!(client.current_temperature(), 22.0);
    println!("✓ Temperatures kept their last plausible values");
}

#[test]
fn test_attach_after_degraded_start() {
    println!("\n=== Test: Late Attach ===");

    let mut client: HeatPumpClient<MockBus> = HeatPumpClient::new();
    client.set_power(true);
    client.set_target_temperature(27.0);
    assert!(!client.power());
    assert!(!client.has_pending());
    println!("✓ Detached client ignored all requests");

    let mut bus = MockBus::new();
    bus.push_bytes(&STATUS_HEAT);
    client.attach(bus, ControllerRole::Primary);
    assert!(client.wait_inbound(ACQUIRE_TIMEOUT));
    assert!(client.power());
    assert_eq!(client.mode(), OperatingMode::Heat);
    println!("✓ Client recovered once a bus arrived");

    client.set_fan_mode(FanSpeed::Low);
    assert!(client.try_send_pending());
    assert_eq!(mock(&client).sent()[1], 0x00, "primary sender address");
    println!("✓ Commands flow with the primary role");
}
