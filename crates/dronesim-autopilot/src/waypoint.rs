//! Turn-then-cruise waypoint steering.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use dronesim_core::config::AutopilotConfig;
use dronesim_core::constants::ALTITUDE_DEADBAND;
use dronesim_core::types::{ControlInputs, DroneState};

/// Steering phase reported with every control update.
///
/// The phase is computed fresh each call from the geometric relationship to
/// the target; it is not stored. `Arrived` is the coordinator's cue to assign
/// a new target; there is no separate arrival check anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutopilotPhase {
    /// Misaligned with the target; yawing toward it, throttle zero.
    Turning,
    /// Facing the target within tolerance; constant throttle applied.
    Cruising,
    /// Within the arrival radius; idle inputs.
    Arrived,
}

/// Control inputs plus the phase they were computed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlUpdate {
    pub inputs: ControlInputs,
    pub phase: AutopilotPhase,
}

/// Simple waypoint autopilot: turn until facing the target, then throttle
/// toward it at a constant step, correcting altitude independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointAutopilot {
    config: AutopilotConfig,
    target: Vec3,
    arrival_radius_sq: f32,
}

impl WaypointAutopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self {
            config,
            target: Vec3::new(0.0, config.flight_altitude, 0.0),
            arrival_radius_sq: config.arrival_radius * config.arrival_radius,
        }
    }

    /// Assign a new destination. The target's Y coordinate is replaced by the
    /// configured flight altitude; targets are always planar at cruise height.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = Vec3::new(target.x, self.config.flight_altitude, target.z);
    }

    /// The current target, snapped to cruise altitude.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Compute the control inputs needed to move toward the target from the
    /// given state.
    pub fn control_update(&self, state: &DroneState) -> ControlUpdate {
        let mut inputs = ControlInputs::default();
        let position = state.position;

        // Arrival: horizontal distance only, altitude is irrelevant.
        let to_target_2d = Vec2::new(self.target.x - position.x, self.target.z - position.z);
        if to_target_2d.length_squared() < self.arrival_radius_sq {
            return ControlUpdate {
                inputs,
                phase: AutopilotPhase::Arrived,
            };
        }

        // Altitude control runs regardless of the turning state.
        let altitude_error = self.target.y - position.y;
        if altitude_error > ALTITUDE_DEADBAND {
            inputs.vertical = 1.0;
        } else if altitude_error < -ALTITUDE_DEADBAND {
            inputs.vertical = -1.0;
        }

        // Yaw control: angle between the horizontal forward projection and
        // the direction to the target.
        let forward = state.forward();
        let forward_2d = Vec2::new(forward.x, forward.z).normalize_or_zero();
        let target_dir_2d = to_target_2d.normalize_or_zero();

        // Clamp the dot product against floating-point excursions outside
        // [-1, 1] before acos.
        let dot = forward_2d.dot(target_dir_2d).clamp(-1.0, 1.0);
        let angle = dot.acos();

        if angle > self.config.yaw_tolerance {
            // The 2D cross product's sign picks the shorter turn direction.
            let cross = forward_2d.x * target_dir_2d.y - forward_2d.y * target_dir_2d.x;
            inputs.yaw = if cross >= 0.0 { 1.0 } else { -1.0 };
            ControlUpdate {
                inputs,
                phase: AutopilotPhase::Turning,
            }
        } else {
            inputs.throttle_step = self.config.constant_throttle_step;
            ControlUpdate {
                inputs,
                phase: AutopilotPhase::Cruising,
            }
        }
    }
}
