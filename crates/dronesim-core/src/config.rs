//! Configuration for starting a simulation.
//!
//! Plain structs with defaults drawn from `constants`. The whole bundle is
//! serializable so a host can load it from a file or ship it over IPC.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Flight dynamics tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Speed in m/s at throttle step 10.
    pub max_forward_speed: f32,
    pub max_strafe_speed: f32,
    pub max_vertical_speed: f32,
    /// Turn rate in radians per second.
    pub yaw_speed: f32,
    /// Multiplier for the throttle smoothing.
    pub acceleration_factor: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            max_forward_speed: MAX_FORWARD_SPEED,
            max_strafe_speed: MAX_STRAFE_SPEED,
            max_vertical_speed: MAX_VERTICAL_SPEED,
            yaw_speed: YAW_SPEED,
            acceleration_factor: ACCELERATION_FACTOR,
        }
    }
}

/// Autopilot behavior tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AutopilotConfig {
    /// Cruise altitude targets are snapped to (m).
    pub flight_altitude: f32,
    /// Throttle step (0..=10) while cruising.
    pub constant_throttle_step: u8,
    /// Horizontal distance at which the target counts as reached (m).
    pub arrival_radius: f32,
    /// Angle within which the drone counts as facing its target (rad).
    pub yaw_tolerance: f32,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            flight_altitude: FLIGHT_ALTITUDE,
            constant_throttle_step: CONSTANT_THROTTLE_STEP,
            arrival_radius: ARRIVAL_RADIUS,
            yaw_tolerance: YAW_TOLERANCE,
        }
    }
}

/// Physics integrator tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Half-size of the cubic world boundary on X and Z (m).
    pub world_boundary: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            world_boundary: WORLD_BOUNDARY,
        }
    }
}

/// AI drone spawn parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Starting altitude for newly created drones (m).
    pub initial_flight_altitude: f32,
    /// Maximum absolute coordinate used when randomizing positions (m).
    pub world_boundary: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            initial_flight_altitude: INITIAL_FLIGHT_ALTITUDE,
            world_boundary: WORLD_BOUNDARY,
        }
    }
}

/// Complete configuration for one simulation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed. Same seed = same AI retargeting sequence.
    pub seed: u64,
    /// Number of AI drones spawned at setup.
    pub ai_drone_count: usize,
    /// Camera tilt rate (rad/s).
    pub camera_tilt_speed: f32,
    /// Camera tilt lower bound (rad).
    pub min_camera_tilt: f32,
    /// Camera tilt upper bound (rad).
    pub max_camera_tilt: f32,
    pub flight: FlightConfig,
    pub autopilot: AutopilotConfig,
    pub physics: PhysicsConfig,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ai_drone_count: AI_DRONE_COUNT,
            camera_tilt_speed: CAMERA_TILT_SPEED,
            min_camera_tilt: MIN_CAMERA_TILT,
            max_camera_tilt: MAX_CAMERA_TILT,
            flight: FlightConfig::default(),
            autopilot: AutopilotConfig::default(),
            physics: PhysicsConfig::default(),
            spawner: SpawnerConfig::default(),
        }
    }
}
