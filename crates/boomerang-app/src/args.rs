//! Command-line options and runner errors.

use std::path::PathBuf;

use boomerang_core::config::TuningConfig;
use boomerang_core::error::ConfigError;
use boomerang_sim::SimConfig;

use crate::game_loop::Pacing;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start game loop: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Parsed runner options.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerArgs {
    pub config: Option<PathBuf>,
    pub seed: u64,
    pub pacing: Pacing,
}

impl Default for RunnerArgs {
    fn default() -> Self {
        Self {
            config: None,
            seed: SimConfig::default().seed,
            pacing: Pacing::RealTime,
        }
    }
}

impl RunnerArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, RunnerError> {
        let mut parsed = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => {
                    let path = iter
                        .next()
                        .ok_or_else(|| RunnerError::Usage("--config needs a path".into()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--seed" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| RunnerError::Usage("--seed needs a value".into()))?;
                    parsed.seed = value
                        .parse()
                        .map_err(|_| RunnerError::Usage(format!("invalid seed: {value}")))?;
                }
                "--fast" => parsed.pacing = Pacing::Unpaced,
                other => return Err(RunnerError::Usage(format!("unknown argument: {other}"))),
            }
        }
        Ok(parsed)
    }

    /// Build the engine config, reading the tuning file if one was given.
    pub fn sim_config(&self) -> Result<SimConfig, RunnerError> {
        let tuning = match &self.config {
            Some(path) => TuningConfig::load(path)?,
            None => TuningConfig::default(),
        };
        Ok(SimConfig {
            seed: self.seed,
            tuning,
        })
    }
}

pub fn usage() -> &'static str {
    "boomerang-app: plays one scripted boomerang round\n\
     \n\
     Options:\n\
     \n\
       --config <path>  JSON tuning file (default: built-in tuning)\n\
       --seed <N>       RNG seed for target spawning (default: 42)\n\
       --fast           Run without real-time pacing\n"
}
