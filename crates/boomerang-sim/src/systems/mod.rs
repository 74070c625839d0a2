//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only work). They do not own state; all state lives in components
//! or is passed in by the engine.

pub mod cleanup;
pub mod flight;
pub mod physics;
pub mod preview;
pub mod round;
pub mod snapshot;
pub mod spawner;
pub mod sweep;
pub mod targets;
pub mod throw;
