//! Simulation constants and tuning parameters.

/// Maximum throttle step. Steps map linearly onto forward speed.
pub const THROTTLE_MAX: u8 = 10;

/// Forward speed in m/s at the maximum throttle step.
pub const MAX_FORWARD_SPEED: f32 = 20.0;

/// Top speed for sideways movement (m/s).
pub const MAX_STRAFE_SPEED: f32 = 10.0;

/// Top speed for vertical movement (m/s).
pub const MAX_VERTICAL_SPEED: f32 = 5.0;

/// Turn rate in radians per second (90 deg/s).
pub const YAW_SPEED: f32 = std::f32::consts::FRAC_PI_2;

/// Multiplier for the exponential throttle smoothing.
pub const ACCELERATION_FACTOR: f32 = 5.0;

/// Below this distance from the target speed the smoothed speed snaps to it
/// exactly, avoiding asymptotic drift.
pub const SPEED_EPSILON: f32 = 0.01;

// --- Autopilot ---

/// Cruise altitude autopilot targets are snapped to (m).
pub const FLIGHT_ALTITUDE: f32 = 20.0;

/// Throttle step applied while cruising toward the target.
pub const CONSTANT_THROTTLE_STEP: u8 = 4;

/// Horizontal distance below which a target counts as reached (m).
pub const ARRIVAL_RADIUS: f32 = 5.0;

/// Angle within which the drone counts as facing its target (rad).
pub const YAW_TOLERANCE: f32 = 0.1;

/// Altitude error band inside which no vertical correction is applied (m).
pub const ALTITUDE_DEADBAND: f32 = 1.0;

// --- World ---

/// Half-size of the cubic world boundary: X and Z are clamped to this
/// absolute value, and random AI targets are drawn inside it.
pub const WORLD_BOUNDARY: f32 = 128.0;

/// Bounding-sphere radius used for drone collision checks (m).
pub const DRONE_COLLISION_RADIUS: f32 = 0.75;

// --- Orchestration ---

/// Number of AI drones spawned at setup.
pub const AI_DRONE_COUNT: usize = 9;

/// Camera tilt rate (rad/s).
pub const CAMERA_TILT_SPEED: f32 = 1.5708;

/// Camera tilt limits (rad): -45 deg to +20 deg.
pub const MIN_CAMERA_TILT: f32 = -0.7854;
pub const MAX_CAMERA_TILT: f32 = 0.3490;

/// Altitude AI drones spawn at (m).
pub const INITIAL_FLIGHT_ALTITUDE: f32 = 20.0;

/// Fixed player spawn position.
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 5.0, 0.0];

/// How long collision markers stay visible in the debug layer (s).
pub const COLLISION_MARKER_DURATION: f32 = 5.0;
