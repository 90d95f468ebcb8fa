//! Persistent settings for the planet generator.
//!
//! Settings live in a RON file (`config.ron`) inside a config directory, which
//! defaults to the platform config dir. Any value can be overridden on the
//! command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, PlanetConfig, default_config_dir};
pub use error::ConfigError;
