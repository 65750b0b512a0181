use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Ticks per second
pub const FPS_VAR: &str = "GRIDLIFE_FPS";

/// Where log lines go
pub const LOG_VAR: &str = "GRIDLIFE_LOG";

const DEFAULT_FRAME_RATE: u32 = 10;
const MAX_FRAME_RATE: u32 = 240;
const DEFAULT_LOG_FILE: &str = "gridlife.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got \"{value}\"")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be between 1 and {MAX_FRAME_RATE}, got {value}")]
    OutOfRange { var: &'static str, value: u32 },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many times per second the board is stepped and redrawn
    pub frame_rate: u32,

    /// Log output. The terminal is taken up by the board, so logs can't go to stdout.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    /// Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(FPS_VAR) {
            config.frame_rate = parse_frame_rate(&value)?;
        }

        if let Some(value) = lookup(LOG_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { var: LOG_VAR });
            }

            config.log_file = PathBuf::from(value);
        }

        Ok(config)
    }

    /// Time budget of a single frame
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate
    }
}

fn parse_frame_rate(value: &str) -> Result<u32, ConfigError> {
    let Ok(n) = value.trim().parse::<u32>() else {
        return Err(ConfigError::NotANumber {
            var: FPS_VAR,
            value: value.to_string(),
        });
    };

    if !(1..=MAX_FRAME_RATE).contains(&n) {
        return Err(ConfigError::OutOfRange {
            var: FPS_VAR,
            value: n,
        });
    }

    Ok(n)
}
