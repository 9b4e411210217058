//! Simulation Configuration
//!
//! Tuning values for a match. Defaults reproduce the standard rules; hosts
//! can override a few of them from the environment.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Environment variable for the RNG seed.
pub const ENV_SEED: &str = "LANE_SIEGE_SEED";
/// Environment variable for the driver speed multiplier.
pub const ENV_SPEED: &str = "LANE_SIEGE_SPEED";
/// Environment variable for the per-second auto-cast rate.
pub const ENV_AUTO_CAST_RATE: &str = "LANE_SIEGE_AUTO_CAST_RATE";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidValue { name: &'static str, value: f64 },

    #[error("could not parse {var}={raw:?}: {reason}")]
    Parse {
        var: &'static str,
        raw: String,
        reason: String,
    },
}

/// Match tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every stochastic decision
    pub seed: u64,
    /// Hero health regeneration per second
    pub health_regen: f64,
    /// Hero mana regeneration per second
    pub mana_regen: f64,
    /// Auto-cast probability per second while fighting a hero
    pub auto_cast_rate: f64,
    /// Distance at which a hero counts as standing on its target
    pub arrival_threshold: f64,
    /// Speed multiplier applied by the driver to wall-clock time
    pub game_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_1A7E,
            health_regen: 0.5,
            mana_regen: 1.0,
            auto_cast_rate: 0.01,
            arrival_threshold: 5.0,
            game_speed: 10.0,
        }
    }
}

impl GameConfig {
    /// Default configuration with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = raw.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Parse {
                var: ENV_SEED,
                raw: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(raw) = lookup(ENV_SPEED) {
            config.game_speed = parse_f64(ENV_SPEED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_AUTO_CAST_RATE) {
            config.auto_cast_rate = parse_f64(ENV_AUTO_CAST_RATE, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite or negative tuning values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("health_regen", self.health_regen),
            ("mana_regen", self.mana_regen),
            ("auto_cast_rate", self.auto_cast_rate),
            ("arrival_threshold", self.arrival_threshold),
            ("game_speed", self.game_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }
        Ok(())
    }
}

/// Parse a float from an environment value.
pub fn parse_f64(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse::<f64>().map_err(|e| ConfigError::Parse {
        var,
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
