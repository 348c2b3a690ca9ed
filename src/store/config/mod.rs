//! Store Configuration
//!
//! Controls and floor plan settings, bundled into one JSON-loadable
//! config with compiled-in defaults.

pub mod controls;
pub mod layout;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use controls::ControlsConfig;
pub use layout::{DisplaySlot, LayoutConfig};

/// Errors raised while loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read failed: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse failed: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub controls: ControlsConfig,
    pub layout: LayoutConfig,
}

impl StoreConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&text).map_err(ConfigError::Parse)
    }

    /// Load from a JSON file if given, falling back to defaults (with a
    /// warning) when the file is missing or malformed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => {
                    log::info!("config: loaded {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("config: {e}; using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_complete() {
        let config = StoreConfig::default();
        assert!(!config.layout.display_slots.is_empty());
        assert!(config.controls.movement_speed > 0.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        // Only controls present; layout falls back to defaults
        let config: StoreConfig =
            serde_json::from_str(r#"{"controls": {"movement_speed": 0.05}}"#).unwrap();
        assert_eq!(config.controls.movement_speed, 0.05);
        assert_eq!(
            config.layout.display_slots.len(),
            LayoutConfig::default().display_slots.len()
        );
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = StoreConfig::load_or_default(Some(Path::new("/nonexistent/store.json")));
        assert!(config.controls.movement_speed > 0.0);
    }
}
