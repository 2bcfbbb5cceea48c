//! AI drone spawn factory.

use glam::{Quat, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dronesim_autopilot::WaypointAutopilot;
use dronesim_core::config::{AutopilotConfig, SpawnerConfig};
use dronesim_core::constants::DRONE_COLLISION_RADIUS;
use dronesim_core::types::{DroneState, DroneStatus};
use dronesim_physics::PhysicsWorld;

use crate::agent::DroneAgent;

/// Create `count` AI agents with ids 1..=count (id 0 is the player's),
/// each with a kinematic body placed at a random planar position at the
/// configured altitude and an autopilot already holding a random target.
pub fn spawn_ai_drones(
    count: usize,
    physics: &mut PhysicsWorld,
    rng: &mut ChaCha8Rng,
    spawner: &SpawnerConfig,
    autopilot: &AutopilotConfig,
) -> Vec<DroneAgent> {
    let mut agents = Vec::with_capacity(count);

    for i in 0..count {
        let mut pilot = WaypointAutopilot::new(*autopilot);
        let start = random_position_on_plane(rng, spawner);
        pilot.set_target(random_position_on_plane(rng, spawner));

        let state = DroneState {
            id: i as u32 + 1,
            position: start,
            orientation: Quat::IDENTITY,
            status: DroneStatus::Active,
        };

        let body = physics.add_kinematic_body(DRONE_COLLISION_RADIUS);
        physics.set_transform(body, state.position, state.orientation);

        agents.push(DroneAgent::new(body, state, Some(pilot)));
    }

    agents
}

fn random_position_on_plane(rng: &mut ChaCha8Rng, spawner: &SpawnerConfig) -> Vec3 {
    let x = rng.gen_range(-1.0f32..=1.0) * spawner.world_boundary;
    let z = rng.gen_range(-1.0f32..=1.0) * spawner.world_boundary;
    Vec3::new(x, spawner.initial_flight_altitude, z)
}
