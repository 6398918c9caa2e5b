//! Referee configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command line flags override both.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. CLI flags            --timeout 9 --min 1 --max 5                   │
//! │  2. Environment          COIN_REFEREE_TIMEOUT_SECS=9 ...               │
//! │  3. Defaults             3 s, 1..=100 coins per type, random seed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;
use std::time::Duration;

use crate::error::RefereeResult;

/// Largest per-type count: four of them must still sum into a `u32`.
pub const MAX_COUNT_PER_TYPE: u32 = u32::MAX / 4;

/// Values given on the command line; `None` keeps the loaded setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub timeout_secs: Option<u64>,
    pub min_count: Option<u32>,
    pub max_count: Option<u32>,
    pub seed: Option<u64>,
    pub max_rounds: Option<u64>,
}

/// Referee configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefereeConfig {
    /// How long each player gets for its whole run.
    pub timeout: Duration,

    /// Minimum number of coins per coin type in a generated input.
    pub min_count: u32,

    /// Maximum number of coins per coin type in a generated input.
    pub max_count: u32,

    /// Seed for input generation; random when absent.
    pub seed: Option<u64>,

    /// Stop each player after this many rounds (otherwise only the deadline stops it).
    pub max_rounds: Option<u64>,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        RefereeConfig {
            timeout: Duration::from_secs(3),
            min_count: 1,
            max_count: 100,
            seed: None,
            max_rounds: None,
        }
    }
}

impl RefereeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Applies command line overrides on top of `self`, then validates.
    pub fn with_overrides(mut self, overrides: Overrides) -> RefereeResult<Self> {
        if let Some(secs) = overrides.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(min) = overrides.min_count {
            self.min_count = min;
        }
        if let Some(max) = overrides.max_count {
            self.max_count = max;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.max_rounds.is_some() {
            self.max_rounds = overrides.max_rounds;
        }
        self.validate()?;
        Ok(self)
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = RefereeConfig::default();

        let config = RefereeConfig {
            timeout: match parse_var::<u64>(&lookup, "COIN_REFEREE_TIMEOUT_SECS")? {
                Some(secs) => Duration::from_secs(secs),
                None => defaults.timeout,
            },
            min_count: parse_var(&lookup, "COIN_REFEREE_MIN_COUNT")?.unwrap_or(defaults.min_count),
            max_count: parse_var(&lookup, "COIN_REFEREE_MAX_COUNT")?.unwrap_or(defaults.max_count),
            seed: parse_var(&lookup, "COIN_REFEREE_SEED")?,
            max_rounds: parse_var(&lookup, "COIN_REFEREE_MAX_ROUNDS")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks the settings make sense together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue("timeout must be positive".to_string()));
        }
        if self.min_count > self.max_count {
            return Err(ConfigError::InvalidValue(format!(
                "min count {} exceeds max count {}",
                self.min_count, self.max_count
            )));
        }
        if self.max_count > MAX_COUNT_PER_TYPE {
            return Err(ConfigError::InvalidValue(format!(
                "max count must be at most {MAX_COUNT_PER_TYPE}"
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(None),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
