//! Application Configuration
//!
//! Typed configuration shared by Bajeti front ends. The structures here are
//! plain data plus YAML serialization helpers; reading and writing the
//! actual file is left to the shell, which knows where its platform keeps
//! configuration.
//!
//! Every section and field carries a serde default, so a config file written
//! by an older build still deserializes cleanly.

use crate::error::{SharedError, SharedResult};
use serde::{Deserialize, Serialize};

/// Main application configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User interface preferences
    pub ui: UiConfig,

    /// Session flags that survive restarts
    pub session: SessionConfig,
}

/// User interface preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether the dashboard renders in its dense, compact layout
    pub compact_mode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            compact_mode: false,
        }
    }
}

/// Session flags persisted across launches.
///
/// `show_menu` is set when a user signs in and cleared on sign-out; while
/// set, the navigation drawer button is offered on every screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether the navigation drawer button should be shown
    pub show_menu: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { show_menu: false }
    }
}

impl AppConfig {
    /// Serialize to YAML for persistence.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> SharedResult<String> {
        serde_yaml::to_string(self).map_err(|e| SharedError::Serialization {
            message: format!("failed to serialize config: {}", e),
        })
    }

    /// Deserialize from YAML. Missing fields fall back to defaults.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(contents: &str) -> SharedResult<Self> {
        serde_yaml::from_str(contents).map_err(|e| SharedError::Serialization {
            message: format!("failed to parse config: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.ui.compact_mode);
        assert!(!config.session.show_menu);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_round_trip() {
        let mut config = AppConfig::default();
        config.ui.compact_mode = true;
        config.session.show_menu = true;

        let yaml = config.to_yaml().unwrap();
        let parsed = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed = AppConfig::from_yaml("session:\n  show_menu: true\n").unwrap();
        assert!(parsed.session.show_menu);
        assert!(!parsed.ui.compact_mode);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = AppConfig::from_yaml("ui: [not, a, map]");
        assert!(result.is_err());
    }
}
