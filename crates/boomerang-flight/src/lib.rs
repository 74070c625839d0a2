//! Flight logic for the boomerang simulation.
//!
//! Trajectory generation, path following, contact classification and the
//! flight state machine. Pure functions over plain data from
//! `boomerang-core`; no ECS dependency.

pub mod classify;
pub mod fsm;
pub mod path;
pub mod trajectory;

pub use boomerang_core as core;

#[cfg(test)]
mod tests;
