//! Capability traits between the coordinator and its collaborators.
//!
//! The render host reads simulation state through two narrow traits rather
//! than one wide interface; the coordinator implements both via composition.

use crate::types::{CameraViewMode, DroneState};
use crate::world::WorldData;

/// Produces the static world bundle, called exactly once at setup.
pub trait TerrainSource {
    fn generate(&mut self) -> WorldData;
}

/// Read-only per-frame state the renderer consumes after each tick.
pub trait RenderDataSource {
    /// Current state of every drone, crashed ones included.
    fn drone_states(&self) -> Vec<DroneState>;
    fn player_drone_id(&self) -> u32;
    /// Id of the drone the camera is attached to.
    fn camera_drone_id(&self) -> u32;
    fn camera_view_mode(&self) -> CameraViewMode;
    fn camera_tilt(&self) -> f32;
    fn hud_text(&self) -> String;
    fn debug_draw_enabled(&self) -> bool;
}

/// Read-only access to the world data generated at setup.
pub trait WorldDataSource {
    /// `None` before setup has run.
    fn world_data(&self) -> Option<&WorldData>;
}
