//! Tunable parameters, loadable from JSON.
//!
//! Every section defaults to the values in [`crate::constants`], so a file
//! only needs to name the fields it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SurfaceCategory;
use crate::error::ConfigError;

/// All tunables of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub flight: FlightTuning,
    pub scoring: ScoringTuning,
    pub round: RoundTuning,
    pub spawner: SpawnerTuning,
    pub world: WorldTuning,
}

/// Trajectory shape and flight timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    pub outward_distance: f64,
    pub curve_radius: f64,
    pub sample_count: u32,
    pub total_flight_time: f64,
    pub settling_grace_period: f64,
    pub sweep_radius: f64,
    pub spin_rate_deg: f64,
    pub throw_speed: f64,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            outward_distance: DEFAULT_OUTWARD_DISTANCE,
            curve_radius: DEFAULT_CURVE_RADIUS,
            sample_count: DEFAULT_SAMPLE_COUNT,
            total_flight_time: DEFAULT_TOTAL_FLIGHT_TIME,
            settling_grace_period: DEFAULT_SETTLING_GRACE_PERIOD,
            sweep_radius: DEFAULT_SWEEP_RADIUS,
            spin_rate_deg: DEFAULT_SPIN_RATE_DEG,
            throw_speed: DEFAULT_THROW_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    pub score_award: u32,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            score_award: DEFAULT_SCORE_AWARD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTuning {
    pub duration_secs: f64,
}

impl Default for RoundTuning {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_ROUND_DURATION,
        }
    }
}

/// Target spawner and target properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerTuning {
    pub enabled: bool,
    pub interval_secs: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub target_lifetime: f64,
    pub target_radius: f64,
    /// Category target colliders report to sweeps.
    pub target_category: SurfaceCategory,
}

impl Default for SpawnerTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: DEFAULT_SPAWN_INTERVAL,
            min_radius: DEFAULT_SPAWN_MIN_RADIUS,
            max_radius: DEFAULT_SPAWN_MAX_RADIUS,
            min_height: DEFAULT_SPAWN_MIN_HEIGHT,
            max_height: DEFAULT_SPAWN_MAX_HEIGHT,
            target_lifetime: DEFAULT_TARGET_LIFETIME,
            target_radius: DEFAULT_TARGET_RADIUS,
            target_category: SurfaceCategory::WorldDynamic,
        }
    }
}

/// Arena geometry and passive physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub gravity: f64,
    pub ground_z: f64,
    pub kill_z: f64,
    pub arena_half_extent: f64,
    pub wall_height: f64,
    pub wall_thickness: f64,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            ground_z: DEFAULT_GROUND_Z,
            kill_z: DEFAULT_KILL_Z,
            arena_half_extent: DEFAULT_ARENA_HALF_EXTENT,
            wall_height: DEFAULT_WALL_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

impl TuningConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.flight;
        check(f.total_flight_time > 0.0, "flight.total_flight_time", "must be positive")?;
        check(
            f.settling_grace_period >= 0.0,
            "flight.settling_grace_period",
            "must not be negative",
        )?;
        check(
            (1..=MAX_SAMPLE_COUNT).contains(&f.sample_count),
            "flight.sample_count",
            "must be between 1 and 1024",
        )?;
        check(f.sweep_radius >= 0.0, "flight.sweep_radius", "must not be negative")?;
        check(f.throw_speed >= 0.0, "flight.throw_speed", "must not be negative")?;

        let s = &self.spawner;
        check(s.interval_secs > 0.0, "spawner.interval_secs", "must be positive")?;
        check(s.min_radius <= s.max_radius, "spawner.min_radius", "must not exceed max_radius")?;
        check(s.min_height <= s.max_height, "spawner.min_height", "must not exceed max_height")?;
        check(s.target_radius > 0.0, "spawner.target_radius", "must be positive")?;

        check(self.round.duration_secs > 0.0, "round.duration_secs", "must be positive")?;
        check(self.world.gravity >= 0.0, "world.gravity", "must not be negative")?;
        Ok(())
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}
