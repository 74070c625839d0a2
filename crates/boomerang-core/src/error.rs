//! Error types.
//!
//! Neither kind is fatal to the simulation: throw rejections are absorbed
//! by the engine, configuration errors stop only the host that loads them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Reasons a throw request is turned into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ThrowRejected {
    #[error("thrower already has a boomerang in flight")]
    AlreadyActive,
    #[error("trajectory has fewer than two waypoints")]
    Unflyable,
    #[error("throw direction has zero length")]
    DegenerateAim,
    #[error("thrower does not exist")]
    UnknownThrower,
    #[error("round is not active")]
    RoundNotActive,
}

/// Errors loading or validating a tuning file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
