//! Headless runner for the boomerang simulation.
//!
//! Wires the simulation engine to a game-loop thread, loads tuning from
//! disk and drives a scripted round.

pub mod args;
pub mod autoplay;
pub mod game_loop;
pub mod state;

pub use boomerang_core as core;
