//! Application configuration: default hike inputs and UI settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default values for the six hike input widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeDefaults {
    /// Average pace in km/h
    pub average_pace_kmh: f64,
    /// Total hike distance in km
    pub distance_km: f64,
    /// Distance between rests in km (raw, snapped at plan time)
    pub rest_interval_km: f64,
    /// Standard rest period in minutes
    pub standard_rest_min: u32,
    /// Lunch rest period in minutes
    pub lunch_rest_min: u32,
    /// Start hour (0-23)
    pub start_hour: u32,
    /// Start minute (0-59)
    pub start_minute: u32,
}

impl Default for HikeDefaults {
    fn default() -> Self {
        Self {
            average_pace_kmh: 5.0,
            distance_km: 30.0,
            rest_interval_km: 5.0,
            standard_rest_min: 15,
            lunch_rest_min: 40,
            start_hour: 7,
            start_minute: 40,
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Shade the 12:00-14:00 lunch window on the chart
    pub show_lunch_window: bool,
    /// Draw start/arrival marker lines on the chart
    pub show_markers: bool,
    /// Chart height in points
    pub chart_height: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_lunch_window: true,
            show_markers: true,
            chart_height: 360.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version that wrote the file
    pub version: String,
    /// Default hike inputs
    pub defaults: HikeDefaults,
    /// UI settings
    pub ui: UiSettings,
    /// Last save timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            defaults: HikeDefaults::default(),
            ui: UiSettings::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "trailpace", "TrailPace")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default path.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a specific path.
///
/// A missing file yields the defaults rather than an error.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default path.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&get_config_path(), config)
}

/// Save application configuration to a specific path.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.defaults, HikeDefaults::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.defaults.distance_km = 21.5;
        config.defaults.start_hour = 6;
        config.ui.show_markers = false;

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.defaults.distance_km, 21.5);
        assert_eq!(loaded.defaults.start_hour, 6);
        assert!(!loaded.ui.show_markers);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "defaults = \"not a table\"").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
