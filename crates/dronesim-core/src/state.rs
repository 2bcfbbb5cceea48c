//! Per-tick state snapshot, the complete render-facing state.

use serde::{Deserialize, Serialize};

use crate::types::{CameraViewMode, DroneState};

/// Camera state for the render host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// Id of the drone the camera follows.
    pub attached_drone_id: u32,
    pub mode: CameraViewMode,
    /// Tilt angle in radians.
    pub tilt: f32,
}

/// Complete visible state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    /// Tick number, increments by one per tick.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
    pub drones: Vec<DroneState>,
    pub player_drone_id: u32,
    pub camera: CameraView,
    pub hud_text: String,
    pub debug_draw_enabled: bool,
}
