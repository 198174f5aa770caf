//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs systems once per frame with the elapsed
//! frame time, and produces GameStateSnapshots for the presentation layer.

pub mod clock;
pub mod collision;
pub mod engine;
pub mod input;
pub mod recoil;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;
