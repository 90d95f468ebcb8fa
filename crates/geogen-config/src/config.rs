//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted config inside a config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform config directory for this application, e.g. `~/.config/geogen`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("geogen"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub planet: PlanetConfig,
    pub debug: DebugConfig,
}

/// Planet shape and level-of-detail settings.
///
/// Heightmaps are runtime data and are not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Base sphere radius.
    pub radius: f64,
    /// Displacement per heightmap byte unit.
    pub height: f64,
    /// Split distance per quadtree depth, coarsest first.
    pub thresholds: Vec<f64>,
    /// Grid cells per patch side.
    pub resolution: u32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 500.0,
            height: 100.0 / 255.0,
            thresholds: vec![1300.0, 900.0, 700.0, 400.0, 200.0],
            resolution: 16,
        }
    }
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("radius: 500.0"));
        assert!(ron_str.contains("resolution: 16"));
        assert!(ron_str.contains("log_level: \"info\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.planet.thresholds = vec![80.0, 40.5];
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(debug: (log_level: \"trace\"))").unwrap();
        assert_eq!(config.planet, PlanetConfig::default());
        assert_eq!(config.debug.log_level, "trace");
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: Config = ron::from_str("(planet: (radius: 6371.0))").unwrap();
        assert_eq!(config.planet.radius, 6371.0);
        assert_eq!(config.planet.resolution, 16);
        assert_eq!(config.planet.thresholds.len(), 5);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(atmosphere: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_thresholds_are_accepted() {
        let config: Config = ron::from_str("(planet: (thresholds: []))").unwrap();
        assert!(config.planet.thresholds.is_empty());
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.planet.radius = 1200.0;
        config.planet.resolution = 32;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        Config::default().save(&nested).unwrap();
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.planet.thresholds = vec![100.0];
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().planet.thresholds, vec![100.0]);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// planet settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_dir_is_namespaced() {
        if let Some(dir) = default_config_dir() {
            assert!(dir.ends_with("geogen"));
        }
    }
}
