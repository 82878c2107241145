// src/config/mod.rs
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{debug, info, warn};

pub use schema::{Settings, DefaultsConfig, DisplayConfig, ExportConfig, UrlConfig};

use crate::error::{DorkError, DorkResult};

const ENV_PREFIX: &str = "DORKFACTORY";

/// Centralized settings handling
impl Settings {
    /// Load settings from built-in defaults, a settings file and the environment
    pub fn load(config_path: Option<&Path>) -> DorkResult<Self> {
        debug!("Loading settings");

        let mut config_builder = ConfigLoader::builder();

        // Default configuration
        config_builder = config_builder.add_source(
            config::File::from_str(
                include_str!("../../config/default.toml"),
                FileFormat::Toml
            )
        );

        // User-provided configuration
        if let Some(path) = config_path {
            if path.exists() {
                config_builder = config_builder.add_source(config::File::from(path));
                info!("Loading user settings from: {}", path.display());
            } else {
                warn!("Specified settings file not found: {}", path.display());
            }
        } else {
            let default_path = Self::get_default_config_path();
            if default_path.exists() {
                config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
                info!("Loading default settings from: {}", default_path.display());
            } else {
                debug!("No settings file found, using built-in defaults");
            }
        }

        // DORKFACTORY_DEFAULTS__ENGINE=both -> defaults.engine
        config_builder = config_builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let settings: Settings = match config_builder.build() {
            Ok(c) => match c.try_deserialize() {
                Ok(settings) => settings,
                Err(e) => return Err(DorkError::ConfigError(format!("Failed to parse settings: {}", e))),
            },
            Err(e) => return Err(DorkError::ConfigError(format!("Failed to build settings: {}", e))),
        };

        Ok(settings)
    }

    /// Get the default settings path
    pub fn get_default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dorkfactory/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_built_in_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let settings = Settings::load(Some(&missing)).unwrap();
        assert_eq!(settings.defaults.engine, "google");
        assert_eq!(settings.display.max_dorks_per_category, 20);
        assert_eq!(settings.export.default_filename, "dorks.txt");
        assert!(!settings.urls.encode);
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nengine = \"both\"\nstrict_queries = true\n\n[display]\nmax_dorks_per_category = 5\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.defaults.engine, "both");
        assert!(settings.defaults.strict_queries);
        assert!(!settings.defaults.reduce_noise);
        assert_eq!(settings.display.max_dorks_per_category, 5);
        assert_eq!(settings.export.default_filename, "dorks.txt");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[display]\nmax_dorks_per_category = \"lots\"\n").unwrap();

        assert!(matches!(Settings::load(Some(&path)), Err(DorkError::ConfigError(_))));
    }
}
