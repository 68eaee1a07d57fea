use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest accepted grid side, in cells
pub const MAX_GRID_UNITS: usize = 4096;

/// Reasons a `SessionConfig` cannot start a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroGridDimension { width: usize, height: usize },
    GridTooLarge { width: usize, height: usize },
    ZeroTickInterval,
    ZeroInitialLength,
    /// The starting snake must fit between the left wall and the grid center
    InitialLengthExceedsGrid { length: usize, max: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroGridDimension { width, height } => {
                write!(f, "Grid dimensions must be positive, got {}x{}", width, height)
            }
            ConfigError::GridTooLarge { width, height } => {
                write!(
                    f,
                    "Grid {}x{} exceeds the maximum of {} cells per side",
                    width, height, MAX_GRID_UNITS
                )
            }
            ConfigError::ZeroTickInterval => write!(f, "Tick interval must be positive"),
            ConfigError::ZeroInitialLength => write!(f, "Initial snake length must be positive"),
            ConfigError::InitialLengthExceedsGrid { length, max } => {
                write!(
                    f,
                    "Initial snake length {} does not fit the grid (max {})",
                    length, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration passed once at session construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Width of the game grid in cells
    pub grid_width_units: usize,
    /// Height of the game grid in cells
    pub grid_height_units: usize,
    /// Time between ticks, used by the host scheduler
    pub tick_interval_ms: u64,
    /// Initial length of the snake
    pub initial_length: usize,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        // 500px board with 20px units, 100ms per tick
        Self {
            grid_width_units: 25,
            grid_height_units: 25,
            tick_interval_ms: 100,
            initial_length: 3,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width_units: width,
            grid_height_units: height,
            ..Default::default()
        }
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Longest snake that fits from the left wall up to the centered head
    pub fn max_initial_length(&self) -> usize {
        self.grid_width_units / 2 + 1
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width_units == 0 || self.grid_height_units == 0 {
            return Err(ConfigError::ZeroGridDimension {
                width: self.grid_width_units,
                height: self.grid_height_units,
            });
        }

        if self.grid_width_units > MAX_GRID_UNITS || self.grid_height_units > MAX_GRID_UNITS {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width_units,
                height: self.grid_height_units,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }

        let max = self.max_initial_length();
        if self.initial_length > max {
            return Err(ConfigError::InitialLengthExceedsGrid {
                length: self.initial_length,
                max,
            });
        }

        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: SessionConfig =
            serde_json::from_str(&json).context("Failed to parse session config")?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}
