//! Shared pieces of the ECSX demo programs
//!
//! - `names_and_positions`: two systems over `Position` and `Name` components
//! - `inheriting_world`: world hooks that keep a global counter and hand it to a system

pub mod components;
pub mod config;
pub mod systems;

pub use config::{DemoConfig, DemoError};

use ecsx::config::Config;
use ecsx::foundation::logging;

/// Set up `env_logger` using the level from `config`. `RUST_LOG` can still narrow it per module.
///
/// Returns `false` when a logger was already installed; the first one stays in place.
pub fn init_logging(config: &DemoConfig) -> bool {
    env_logger::Builder::from_default_env()
        .filter_level(logging::parse_level(&config.log_level))
        .try_init()
        .is_ok()
}

/// Load the demo configuration from the first command line argument, if there is one
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or the loaded values are invalid.
pub fn load_config_from_args() -> Result<DemoConfig, DemoError> {
    let path = std::env::args().nth(1);
    let config = DemoConfig::load_or_default(path.as_deref())?;
    config.validate()?;
    Ok(config)
}
