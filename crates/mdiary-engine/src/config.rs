//! Configuration for mdiary.
//!
//! Configuration is a small JSON document. Every field is optional; missing
//! fields take their defaults and unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Lowest accepted tick rate, roughly one frame at 60 Hz.
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Main configuration for mdiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Heading shown above the tab strip.
    #[serde(default = "default_title")]
    pub title: String,

    /// Hint shown in the Write panel while the entry is empty.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Color palette.
    #[serde(default)]
    pub theme: ThemeName,

    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Use plain ASCII border glyphs.
    #[serde(default)]
    pub ascii_borders: bool,
}

fn default_title() -> String {
    "Markdown Diary".into()
}

fn default_placeholder() -> String {
    "Write your diary entry here using Markdown...".into()
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// Named color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark palette.
    #[default]
    Mocha,
    /// Light palette.
    Latte,
    /// Maximum contrast palette.
    HighContrast,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            theme: ThemeName::default(),
            tick_rate_ms: default_tick_rate_ms(),
            ascii_borders: false,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Tick rate clamped to [`MIN_TICK_RATE_MS`].
    pub fn effective_tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.max(MIN_TICK_RATE_MS)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "Markdown Diary");
        assert_eq!(config.theme, ThemeName::Mocha);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(!config.ascii_borders);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"theme":"high_contrast","unknown":1}"#).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.placeholder, default_placeholder());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            title: "Journal".into(),
            theme: ThemeName::Latte,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_tick_rate_clamped() {
        let config = Config {
            tick_rate_ms: 1,
            ..Config::default()
        };
        assert_eq!(config.effective_tick_rate_ms(), MIN_TICK_RATE_MS);
    }
}
