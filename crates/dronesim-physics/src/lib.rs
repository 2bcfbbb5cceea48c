//! Physics integrator for DroneSim.
//!
//! Owns all simulated bodies (kinematic and dynamic), applies submitted move
//! intents, integrates position with explicit Euler steps, clamps to world
//! bounds, and reports overlaps between bodies and against static geometry.
//! It is the sole source of truth for body position and orientation.

pub mod collision;
pub mod integrator;

pub use dronesim_core as core;
pub use integrator::PhysicsWorld;
