//! Frame-driven simulation core for DroneSim.
//!
//! Owns the drone agents, runs autopilot / flight dynamics / physics in
//! order each tick, reacts to collisions, and exposes read-only state to the
//! render host. Completely headless: no window, no device polling.

pub mod agent;
pub mod debug_draw;
pub mod flight;
pub mod input;
pub mod orchestrator;
pub mod spawner;
pub mod terrain;

pub use dronesim_core as core;
pub use orchestrator::Orchestrator;
