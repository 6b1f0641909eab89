//! Demo configuration

use ecsx::config::{Config, ConfigError, WorldConfig};
use serde::{Deserialize, Serialize};

/// Errors the demo programs can report
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A system the demo expects was never registered
    #[error("System not registered: {0}")]
    MissingSystem(&'static str),
}

/// Settings shared by both demo programs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How many times to tick the world
    pub ticks: u32,
    /// Default log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Extra randomly placed, unnamed entities to spawn
    pub extra_entities: u32,
    /// Seed for the random placement
    pub seed: u64,
    /// World settings
    pub world: WorldConfig,
}

impl DemoConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an invalid world section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: 3,
            log_level: "info".to_string(),
            extra_entities: 0,
            seed: 0,
            world: WorldConfig::new("demo"),
        }
    }
}

impl Config for DemoConfig {}
