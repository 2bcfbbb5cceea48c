//! Tests for the waypoint autopilot steering policy.

use glam::{Quat, Vec3};

use dronesim_core::config::AutopilotConfig;
use dronesim_core::types::DroneState;

use crate::waypoint::{AutopilotPhase, WaypointAutopilot};

fn autopilot() -> WaypointAutopilot {
    WaypointAutopilot::new(AutopilotConfig::default())
}

fn state_at(position: Vec3, orientation: Quat) -> DroneState {
    DroneState {
        id: 1,
        position,
        orientation,
        ..Default::default()
    }
}

#[test]
fn test_target_snaps_to_flight_altitude() {
    let config = AutopilotConfig::default();
    let mut ap = WaypointAutopilot::new(config);
    ap.set_target(Vec3::new(50.0, 123.0, -30.0));
    assert_eq!(ap.target(), Vec3::new(50.0, config.flight_altitude, -30.0));
}

#[test]
fn test_cruises_when_facing_target() {
    let config = AutopilotConfig::default();
    let mut ap = autopilot();
    // Target straight ahead along +Z at cruise altitude.
    ap.set_target(Vec3::new(0.0, 0.0, 100.0));
    let state = state_at(Vec3::new(0.0, config.flight_altitude, 0.0), Quat::IDENTITY);

    let update = ap.control_update(&state);
    assert_eq!(update.phase, AutopilotPhase::Cruising);
    assert_eq!(update.inputs.throttle_step, config.constant_throttle_step);
    assert_eq!(update.inputs.yaw, 0.0);
    assert_eq!(update.inputs.vertical, 0.0);
}

#[test]
fn test_turns_with_zero_throttle_when_misaligned() {
    let mut ap = autopilot();
    // Facing +Z, target behind on -Z: a turn is required either way.
    ap.set_target(Vec3::new(0.0, 20.0, -100.0));
    let state = state_at(Vec3::new(0.0, 20.0, 0.0), Quat::IDENTITY);

    let update = ap.control_update(&state);
    assert_eq!(update.phase, AutopilotPhase::Turning);
    assert_eq!(update.inputs.throttle_step, 0);
    assert!(update.inputs.yaw == 1.0 || update.inputs.yaw == -1.0);
}

#[test]
fn test_yaw_direction_matches_shorter_rotation() {
    let mut ap = autopilot();
    let state = state_at(Vec3::new(0.0, 20.0, 0.0), Quat::IDENTITY);

    // Facing +Z. A target on +X versus one on -X must produce opposite
    // yaw commands.
    ap.set_target(Vec3::new(100.0, 20.0, 0.0));
    let toward_pos_x = ap.control_update(&state).inputs.yaw;
    ap.set_target(Vec3::new(-100.0, 20.0, 0.0));
    let toward_neg_x = ap.control_update(&state).inputs.yaw;

    assert_eq!(toward_pos_x, -1.0);
    assert_eq!(toward_neg_x, 1.0);
}

#[test]
fn test_arrival_returns_idle_inputs() {
    let config = AutopilotConfig::default();
    let mut ap = autopilot();
    ap.set_target(Vec3::new(10.0, 0.0, 10.0));

    // Horizontally inside the arrival radius, but far below cruise altitude:
    // arrival wins over the altitude error.
    let state = state_at(
        Vec3::new(10.0 + config.arrival_radius * 0.5, 2.0, 10.0),
        Quat::IDENTITY,
    );
    let update = ap.control_update(&state);
    assert_eq!(update.phase, AutopilotPhase::Arrived);
    assert_eq!(update.inputs, Default::default());
}

#[test]
fn test_altitude_correction_active_while_turning() {
    let mut ap = autopilot();
    ap.set_target(Vec3::new(0.0, 0.0, -100.0));

    // Well below cruise altitude and facing away from the target.
    let low = state_at(Vec3::new(0.0, 5.0, 0.0), Quat::IDENTITY);
    let update = ap.control_update(&low);
    assert_eq!(update.phase, AutopilotPhase::Turning);
    assert_eq!(update.inputs.vertical, 1.0);

    // Well above cruise altitude.
    let high = state_at(Vec3::new(0.0, 80.0, 0.0), Quat::IDENTITY);
    assert_eq!(ap.control_update(&high).inputs.vertical, -1.0);
}

#[test]
fn test_altitude_deadband_suppresses_correction() {
    let config = AutopilotConfig::default();
    let mut ap = autopilot();
    ap.set_target(Vec3::new(0.0, 0.0, 100.0));
    let state = state_at(
        Vec3::new(0.0, config.flight_altitude + 0.5, 0.0),
        Quat::IDENTITY,
    );
    assert_eq!(ap.control_update(&state).inputs.vertical, 0.0);
}

#[test]
fn test_vertical_forward_vector_does_not_panic() {
    // Orientation pitched straight up: the horizontal forward projection is
    // zero-length. The update must come back finite with a definite turn.
    let mut ap = autopilot();
    ap.set_target(Vec3::new(100.0, 0.0, 0.0));
    let pitched = Quat::from_axis_angle(Vec3::X, -std::f32::consts::FRAC_PI_2);
    let state = state_at(Vec3::new(0.0, 20.0, 0.0), pitched);

    let update = ap.control_update(&state);
    assert!(update.inputs.yaw.is_finite());
    assert_eq!(update.phase, AutopilotPhase::Turning);
}
