//! Simulation engine for the boomerang game.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `GameStateSnapshot`s for the host.

pub mod engine;
pub mod ids;
pub mod ownership;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use boomerang_core as core;
pub use engine::{SimConfig, SimulationEngine};
