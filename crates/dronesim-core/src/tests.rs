//! Tests for core types: geometry helpers, intents, and serialization.

use glam::{Quat, Vec3};

use crate::config::SimConfig;
use crate::types::*;
use crate::world::{Aabb, HeightField};

#[test]
fn test_drone_state_axes_identity() {
    let state = DroneState::default();
    assert!((state.forward() - Vec3::Z).length() < 1e-6);
    assert!((state.right() - Vec3::X).length() < 1e-6);
}

#[test]
fn test_drone_state_axes_rotated() {
    // Quarter turn about Y maps local +Z onto world +X.
    let state = DroneState {
        orientation: Quat::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_2),
        ..Default::default()
    };
    assert!((state.forward() - Vec3::X).length() < 1e-5);
}

#[test]
fn test_status_default_is_active() {
    assert_eq!(DroneStatus::default(), DroneStatus::Active);
    assert_eq!(DroneState::default().status, DroneStatus::Active);
}

#[test]
fn test_static_handle_is_zero() {
    assert_eq!(BodyHandle::STATIC, BodyHandle(0));
}

#[test]
fn test_move_intent_roundtrips_through_json() {
    let intent = MoveIntent::Kinematic {
        velocity: Vec3::new(1.0, 2.0, 3.0),
        orientation: Quat::IDENTITY,
    };
    let json = serde_json::to_string(&intent).unwrap();
    let back: MoveIntent = serde_json::from_str(&json).unwrap();
    assert_eq!(intent, back);
}

#[test]
fn test_aabb_closest_point() {
    let aabb = Aabb::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0));
    // Point above the box clamps to the top face.
    let p = aabb.closest_point(Vec3::new(0.5, 5.0, 0.0));
    assert_eq!(p, Vec3::new(0.5, 2.0, 0.0));
    // Point inside the box is returned unchanged.
    let inside = Vec3::new(0.1, 1.0, -0.2);
    assert_eq!(aabb.closest_point(inside), inside);
}

#[test]
fn test_heightfield_sampling_and_clamping() {
    let mut field = HeightField::flat(4, 10.0);
    field.heights[0] = 7.0; // corner cell at (-20..-10, -20..-10)
    assert_eq!(field.height_at(-15.0, -15.0), 7.0);
    assert_eq!(field.height_at(15.0, 15.0), 0.0);
    // Out-of-range coordinates clamp to the border cell.
    assert_eq!(field.height_at(-1000.0, -1000.0), 7.0);
}

#[test]
fn test_sim_config_defaults_are_sane() {
    let config = SimConfig::default();
    assert_eq!(config.ai_drone_count, 9);
    assert!(config.min_camera_tilt < config.max_camera_tilt);
    assert!(config.autopilot.constant_throttle_step <= crate::constants::THROTTLE_MAX);
    assert!(config.physics.world_boundary > 0.0);
}
