//! The drone agent: identity, physics handle, state, and optional autopilot.

use dronesim_autopilot::WaypointAutopilot;
use dronesim_core::types::{BodyHandle, DroneState, DroneStatus};

/// A simulated drone. Created once at setup (player) or by the spawner (AI),
/// mutated every frame by the orchestrator, never destroyed during a
/// session; crashed agents stay in the list.
#[derive(Debug, Clone)]
pub struct DroneAgent {
    /// Handle of this agent's body in the physics world.
    pub body: BodyHandle,
    pub state: DroneState,
    /// `None` for the player agent.
    pub autopilot: Option<WaypointAutopilot>,
    /// Smoothed forward speed, owned here and advanced by the flight model.
    pub forward_speed: f32,
}

impl DroneAgent {
    pub fn new(body: BodyHandle, state: DroneState, autopilot: Option<WaypointAutopilot>) -> Self {
        Self {
            body,
            state,
            autopilot,
            forward_speed: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.status == DroneStatus::Active
    }

    /// Terminal and irreversible.
    pub fn mark_crashed(&mut self) {
        self.state.status = DroneStatus::Crashed;
    }
}
