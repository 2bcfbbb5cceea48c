//! Fundamental simulation types: drone state, control inputs, move intents,
//! physics handles, and collision events.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a drone. Transitions only Active -> Crashed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneStatus {
    #[default]
    Active,
    Crashed,
}

/// Camera follow mode for the render host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraViewMode {
    FirstPerson,
    #[default]
    OverTheShoulder,
}

/// The physical state of a drone at a point in time.
///
/// Value type: the physics integrator produces copies of it and the
/// coordinator merges them back. `id` and `status` are coordinator-owned
/// and must survive physics overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneState {
    /// Unique drone id. 0 is reserved for the player.
    pub id: u32,
    pub position: Vec3,
    /// Unit quaternion.
    pub orientation: Quat,
    pub status: DroneStatus,
}

impl Default for DroneState {
    fn default() -> Self {
        Self {
            id: 0,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            status: DroneStatus::Active,
        }
    }
}

impl DroneState {
    /// World-space forward axis (local +Z rotated by the orientation).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// World-space right axis (local +X rotated by the orientation).
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }
}

/// Control inputs for a single frame, produced by the player adapter or an
/// autopilot and consumed immediately by the flight dynamics model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Discretized forward-speed command, 0..=10.
    pub throttle_step: u8,
    /// Sideways movement, -1.0..=1.0.
    pub strafe: f32,
    /// Vertical movement, -1.0..=1.0.
    pub vertical: f32,
    /// Turn rate command, -1.0..=1.0.
    pub yaw: f32,
}

/// A drone's desired movement for the current frame.
///
/// Exactly one variant is valid per body kind: `Kinematic` for kinematic
/// bodies, `Dynamic` for force-driven bodies. Submitting the wrong variant
/// to the integrator is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveIntent {
    /// Set velocity and orientation directly (overwrites, not additive).
    Kinematic { velocity: Vec3, orientation: Quat },
    /// Accumulate force and torque for the next physics step.
    Dynamic { force: Vec3, torque: Vec3 },
}

/// Opaque handle to a body owned by the physics integrator.
///
/// Handles are unique, monotonically increasing, and never reused.
/// Handle 0 is reserved for static geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// Pseudo-handle identifying static geometry in collision events.
    pub const STATIC: BodyHandle = BodyHandle(0);
}

/// A collision detected by the physics integrator during a step.
/// Ephemeral: raised by `step` and consumed synchronously by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    /// Approximate contact position in world space.
    pub contact: Vec3,
}
