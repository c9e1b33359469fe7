//! Demo application configuration persistence.
//!
//! Widget preferences (theme choice, mode, label style, label scale) stored
//! as TOML under the platform config directory. Completion data itself is
//! never persisted here; the widget is fed by its host.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persisted demo preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// "light", "dark" or "system"
    pub theme: String,
    /// "calendar" or "tracker"
    pub mode: String,
    /// Weekday label style index, 0-3
    pub week_label_style: usize,
    /// Label size scale handed to the widget, 0.0-1.0
    pub label_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            mode: "tracker".to_string(),
            week_label_style: 0,
            label_scale: 0.8,
        }
    }
}

impl AppConfig {
    /// Load the config from `path`, falling back to defaults when the file
    /// does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Per-user config file location, or `None` when no home directory can
    /// be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tracker-calendar")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig {
            theme: "dark".to_string(),
            mode: "calendar".to_string(),
            week_label_style: 2,
            label_scale: 0.6,
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [not toml").unwrap();

        match AppConfig::load_from(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.mode, AppConfig::default().mode);
        assert_eq!(config.week_label_style, 0);
    }
}
