//! Core types and definitions for the DroneSim simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! drone state, control inputs, move intents, world data, configuration,
//! and the read-only capability traits the renderer consumes. It has no
//! dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod sources;
pub mod state;
pub mod types;
pub mod world;

#[cfg(test)]
mod tests;
