//! Player input adapter.
//!
//! The host hands the coordinator a plain boolean snapshot each frame; the
//! adapter derives continuous axes from held keys and edge-detects presses
//! for discrete actions (throttle steps, toggles).

use dronesim_core::constants::THROTTLE_MAX;
use dronesim_core::types::ControlInputs;

/// Raw per-frame input state supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Throttle up one step on press.
    pub forward: bool,
    /// Throttle down one step on press.
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub up: bool,
    pub down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub tilt_up: bool,
    pub tilt_down: bool,
    pub switch_camera: bool,
    pub switch_drone: bool,
    pub toggle_debug: bool,
}

/// Stateful adapter: tracks the previous snapshot to tell a held key from a
/// fresh press.
#[derive(Debug, Clone, Default)]
pub struct PlayerInputAdapter {
    controls: ControlInputs,
    tilt_input: f32,
    throttle_step: u8,
    switch_camera_pressed: bool,
    switch_drone_pressed: bool,
    toggle_debug_pressed: bool,
    previous: InputSnapshot,
}

fn axis(negative: bool, positive: bool) -> f32 {
    let mut value = 0.0;
    if positive {
        value += 1.0;
    }
    if negative {
        value -= 1.0;
    }
    value
}

impl PlayerInputAdapter {
    /// Ingest one raw snapshot. Called once per frame before anything reads
    /// the derived state.
    pub fn update(&mut self, snapshot: &InputSnapshot) {
        self.controls.strafe = axis(snapshot.strafe_left, snapshot.strafe_right);
        self.controls.vertical = axis(snapshot.down, snapshot.up);
        self.controls.yaw = axis(snapshot.yaw_left, snapshot.yaw_right);
        self.tilt_input = axis(snapshot.tilt_down, snapshot.tilt_up);

        if snapshot.forward && !self.previous.forward {
            self.throttle_step = (self.throttle_step + 1).min(THROTTLE_MAX);
        }
        if snapshot.backward && !self.previous.backward {
            self.throttle_step = self.throttle_step.saturating_sub(1);
        }
        self.controls.throttle_step = self.throttle_step;

        self.switch_camera_pressed = snapshot.switch_camera && !self.previous.switch_camera;
        self.switch_drone_pressed = snapshot.switch_drone && !self.previous.switch_drone;
        self.toggle_debug_pressed = snapshot.toggle_debug && !self.previous.toggle_debug;

        self.previous = *snapshot;
    }

    pub fn flight_controls(&self) -> ControlInputs {
        self.controls
    }

    pub fn camera_tilt_input(&self) -> f32 {
        self.tilt_input
    }

    pub fn switch_camera_pressed(&self) -> bool {
        self.switch_camera_pressed
    }

    pub fn switch_drone_pressed(&self) -> bool {
        self.switch_drone_pressed
    }

    pub fn toggle_debug_pressed(&self) -> bool {
        self.toggle_debug_pressed
    }
}
