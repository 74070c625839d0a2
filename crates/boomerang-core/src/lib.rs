//! Core types and definitions for the boomerang simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, tunables and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use glam::DVec3;

#[cfg(test)]
mod tests;
