//! Simulation constants and default tuning parameters.
//!
//! World units are centimetres, z up.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Trajectory ---

/// How far the boomerang travels outward before returning.
pub const DEFAULT_OUTWARD_DISTANCE: f64 = 1000.0;

/// Lateral amplitude of the signature curve.
pub const DEFAULT_CURVE_RADIUS: f64 = 300.0;

/// Number of path segments; the path has one more waypoint than this.
pub const DEFAULT_SAMPLE_COUNT: u32 = 20;

/// Largest accepted sample count.
pub const MAX_SAMPLE_COUNT: u32 = 1024;

// --- Flight ---

/// Seconds to traverse the whole path.
pub const DEFAULT_TOTAL_FLIGHT_TIME: f64 = 2.5;

/// Seconds a boomerang lingers after a blocking contact.
pub const DEFAULT_SETTLING_GRACE_PERIOD: f64 = 3.0;

/// Radius of the swept sphere used for boomerang collision.
pub const DEFAULT_SWEEP_RADIUS: f64 = 12.0;

/// Visual spin rate (degrees per second).
pub const DEFAULT_SPIN_RATE_DEG: f64 = 720.0;

/// Launch speed of aim-direction-only throws.
pub const DEFAULT_THROW_SPEED: f64 = 1200.0;

// --- Aim ---

/// Pitch is clamped to this magnitude (degrees).
pub const PITCH_LIMIT_DEG: f64 = 89.0;

// --- Scoring ---

/// Points awarded per destroyed target.
pub const DEFAULT_SCORE_AWARD: u32 = 100;

// --- Round ---

/// Round length in seconds.
pub const DEFAULT_ROUND_DURATION: f64 = 60.0;

// --- Targets and spawner ---

/// Seconds a target lives before removing itself.
pub const DEFAULT_TARGET_LIFETIME: f64 = 5.0;

/// Collision radius of a target.
pub const DEFAULT_TARGET_RADIUS: f64 = 50.0;

/// Seconds between target spawns.
pub const DEFAULT_SPAWN_INTERVAL: f64 = 5.0;

pub const DEFAULT_SPAWN_MIN_RADIUS: f64 = 200.0;
pub const DEFAULT_SPAWN_MAX_RADIUS: f64 = 900.0;
pub const DEFAULT_SPAWN_MIN_HEIGHT: f64 = 40.0;
pub const DEFAULT_SPAWN_MAX_HEIGHT: f64 = 600.0;

// --- World ---

/// Passive physics gravity (cm/s²).
pub const DEFAULT_GRAVITY: f64 = 980.0;

/// Height of the ground plane.
pub const DEFAULT_GROUND_Z: f64 = 0.0;

/// Bodies below this height are removed.
pub const DEFAULT_KILL_Z: f64 = -5000.0;

/// Half extent of the square arena enclosed by walls.
pub const DEFAULT_ARENA_HALF_EXTENT: f64 = 2500.0;

pub const DEFAULT_WALL_HEIGHT: f64 = 800.0;
pub const DEFAULT_WALL_THICKNESS: f64 = 50.0;

// --- Thrower ---

/// Thrower spawn location (capsule centre, standing on the ground).
pub const THROWER_SPAWN: [f64; 3] = [0.0, 0.0, 96.0];

/// Thrower body half extents (capsule approximated by a box).
pub const THROWER_HALF_EXTENTS: [f64; 3] = [55.0, 55.0, 96.0];
