//! Waypoint autopilot for AI drones.
//!
//! Implements the turn-then-cruise steering policy as pure geometry over the
//! current drone state. No I/O and no simulation dependency: the coordinator
//! feeds states in and gets control inputs out.

pub mod waypoint;

pub use dronesim_core as core;
pub use waypoint::{AutopilotPhase, ControlUpdate, WaypointAutopilot};

#[cfg(test)]
mod tests;
