//! Configuration for retrobus
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML formats, stored by default in the platform configuration directory.
//!
//! Configuration is organized into:
//! - UI preferences (which front-end to run, whether to echo changes)
//! - Initial state: tag name to value, published at start-up

use retrobus_core::Error;
use retrobus_ui::UiTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Application directory name under the platform config directory
const APP_DIR: &str = "retrobus";
/// Default configuration file name
const CONFIG_FILE: &str = "config.toml";

/// Front-end selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    /// Interactive command line
    #[default]
    Cli,
    /// No user interface: apply configuration and exit
    Null,
}

impl std::fmt::Display for Frontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Front-end to run
    pub frontend: Frontend,
    /// Print every state change the front-end observes
    pub echo_changes: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frontend: Frontend::Cli,
            echo_changes: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiSettings,
    /// Initial values keyed by tag name
    pub state: BTreeMap<String, i32>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from an explicit path, or from the default location
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default configuration.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("none").to_string(),
                ))
            }
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("none").to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// State keys must be tag names exactly as [`UiTag::name`] spells them,
    /// so saving never adds a second key for the same tag.
    pub fn validate(&self) -> SettingsResult<()> {
        for name in self.state.keys() {
            if UiTag::from_name(name).is_none() {
                return Err(SettingsError::InvalidSetting {
                    key: format!("state.{}", name),
                    reason: "not a known state tag (names are lower-case)".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Initial state resolved to tags, in tag order
    pub fn initial_state(&self) -> SettingsResult<Vec<(UiTag, i32)>> {
        let mut entries = self
            .state
            .iter()
            .map(|(name, value)| -> SettingsResult<(UiTag, i32)> {
                let tag = UiTag::from_name(name).ok_or_else(|| Error::UnknownTag {
                    name: name.clone(),
                })?;
                Ok((tag, *value))
            })
            .collect::<SettingsResult<Vec<_>>>()?;
        entries.sort_by_key(|(tag, _)| *tag);
        Ok(entries)
    }

    /// Record an initial value for a tag
    pub fn set_state(&mut self, tag: UiTag, value: i32) {
        self.state.insert(tag.name().to_string(), value);
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.ui.frontend, Frontend::Cli);
        assert!(config.ui.echo_changes);
        assert!(config.state.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let mut config = Config::new();
        config.state.insert("warp-speed".to_string(), 9);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { .. }));
        assert!(config.initial_state().is_err());
    }

    #[test]
    fn test_state_keys_are_case_sensitive() {
        let mut config = Config::new();
        config.state.insert("Volume".to_string(), 10);
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));
        assert!(matches!(
            config.initial_state(),
            Err(SettingsError::Core(Error::UnknownTag { .. }))
        ));
    }

    #[test]
    fn test_set_state_overwrites_saved_key() {
        let mut config = Config::new();
        config.state.insert("volume".to_string(), 10);
        config.set_state(UiTag::AudioVolume, 90);
        assert_eq!(config.state.len(), 1);
        assert_eq!(config.initial_state().unwrap(), vec![(UiTag::AudioVolume, 90)]);
    }

    #[test]
    fn test_initial_state_in_tag_order() {
        let mut config = Config::new();
        config.set_state(UiTag::Zoom, 3);
        config.set_state(UiTag::Fullscreen, 1);
        config.set_state(UiTag::Machine, 2);

        let state = config.initial_state().unwrap();
        assert_eq!(
            state,
            vec![(UiTag::Machine, 2), (UiTag::Fullscreen, 1), (UiTag::Zoom, 3)]
        );
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            frontend = "null"

            [state]
            fullscreen = 1
            volume = 55
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.frontend, Frontend::Null);
        assert!(config.ui.echo_changes);
        assert_eq!(config.state.get("volume"), Some(&55));
    }

    #[test]
    fn test_frontend_display() {
        assert_eq!(Frontend::Cli.to_string(), "cli");
        assert_eq!(Frontend::Null.to_string(), "null");
    }
}
