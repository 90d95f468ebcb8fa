//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Planet generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "geogen", about = "Adaptive cube-sphere planet mesh generator")]
pub struct CliArgs {
    /// Planet base radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Displacement per heightmap byte unit.
    #[arg(long)]
    pub height: Option<f64>,

    /// Grid cells per patch side.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Split distance per depth, comma separated (e.g. 1300,900,700).
    #[arg(long, value_delimiter = ',')]
    pub thresholds: Option<Vec<f64>>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 120)]
    pub ticks: u32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(height) = args.height {
            self.planet.height = height;
        }
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(ref thresholds) = args.thresholds {
            self.planet.thresholds = thresholds.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
