//! Startup configuration read from the environment.
//!
//! - `LIFE_WIDTH` / `LIFE_HEIGHT`: initial grid size (default 20x20)
//! - `LIFE_TICK_MS`: milliseconds between generations (default 1000)

use std::time::Duration;

use thiserror::Error;

use crate::application::DEFAULT_TICK_INTERVAL;
use crate::domain::{Axis, DimensionError, Dimensions};

pub const WIDTH_VAR: &str = "LIFE_WIDTH";
pub const HEIGHT_VAR: &str = "LIFE_HEIGHT";
pub const TICK_MS_VAR: &str = "LIFE_TICK_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Dimension {
        var: &'static str,
        #[source]
        source: DimensionError,
    },
    #[error("LIFE_TICK_MS must be a positive number of milliseconds, got {0:?}")]
    TickInterval(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub dimensions: Dimensions,
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let read_axis = |var: &'static str, axis: Axis, default: usize| match lookup(var) {
            Some(raw) => Dimensions::parse_axis(axis, &raw)
                .map_err(|source| ConfigError::Dimension { var, source }),
            None => Ok(default),
        };
        let width = read_axis(WIDTH_VAR, Axis::Width, defaults.dimensions.width())?;
        let height = read_axis(HEIGHT_VAR, Axis::Height, defaults.dimensions.height())?;
        let dimensions = Dimensions::new(width, height)
            .map_err(|source| ConfigError::Dimension { var: WIDTH_VAR, source })?;

        let tick_interval = match lookup(TICK_MS_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::TickInterval(raw)),
            },
            None => defaults.tick_interval,
        };

        Ok(Self {
            dimensions,
            tick_interval,
        })
    }
}
