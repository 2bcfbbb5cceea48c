//! Flight dynamics model: control inputs in, move intent out.
//!
//! Stateless: the smoothed forward speed lives on the agent and is passed
//! in by reference, so the model can be tested in isolation and no hidden
//! per-drone map exists anywhere.

use glam::{Quat, Vec3};

use dronesim_core::config::FlightConfig;
use dronesim_core::constants::{SPEED_EPSILON, THROTTLE_MAX};
use dronesim_core::types::{ControlInputs, DroneState, MoveIntent};

/// Translate one frame of control inputs into a kinematic move intent.
///
/// `forward_speed` is the agent's persistent smoothed speed; it is advanced
/// toward the throttle target by a time-scaled interpolation and snapped
/// once within `SPEED_EPSILON` to avoid asymptotic drift.
pub fn generate_move_intent(
    state: &DroneState,
    inputs: &ControlInputs,
    forward_speed: &mut f32,
    config: &FlightConfig,
    dt: f32,
) -> MoveIntent {
    let throttle = inputs.throttle_step.min(THROTTLE_MAX);
    let target_speed = (throttle as f32 / THROTTLE_MAX as f32) * config.max_forward_speed;

    if (target_speed - *forward_speed).abs() > SPEED_EPSILON {
        let blend = (dt * config.acceleration_factor).min(1.0);
        *forward_speed += (target_speed - *forward_speed) * blend;
    } else {
        *forward_speed = target_speed;
    }

    let velocity = state.forward() * *forward_speed
        + state.right() * inputs.strafe * config.max_strafe_speed
        + Vec3::Y * inputs.vertical * config.max_vertical_speed;

    // Negative sign keeps the turn direction consistent with the autopilot's
    // cross-product steering: yaw -1 rotates local +Z toward world +X.
    let yaw_angle = -inputs.yaw * config.yaw_speed * dt;
    let orientation = (state.orientation * Quat::from_axis_angle(Vec3::Y, yaw_angle)).normalize();

    MoveIntent::Kinematic {
        velocity,
        orientation,
    }
}

/// Force-based intent for future dynamic bodies. No drone uses it yet; the
/// kinematic path above is the only one exercised by the coordinator.
pub fn dynamic_intent(force: Vec3, torque: Vec3) -> MoveIntent {
    MoveIntent::Dynamic { force, torque }
}
