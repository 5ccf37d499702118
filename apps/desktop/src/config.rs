//! Configuration management for the Bajeti desktop app
//!
//! Wraps the shared [`AppConfig`] with file persistence under the platform
//! config directory. A missing file yields defaults; every setter writes the
//! file back immediately so preferences survive a crash.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use bajeti_shared::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use bajeti_shared::AppConfig;

/// Manages loading and saving the desktop app configuration.
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a manager backed by the default platform config path,
    /// loading the file if it exists.
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path();
        Self::with_path(config_path)
    }

    /// Create a manager backed by an explicit path. Used by tests and by
    /// installs that relocate their configuration.
    pub fn with_path(config_path: PathBuf) -> Result<Self> {
        let config = Self::load_from(&config_path)?;
        Ok(Self {
            config,
            config_path,
        })
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
                home.join(".config")
            })
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    fn load_from(path: &PathBuf) -> Result<AppConfig> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(AppConfig::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        match AppConfig::from_yaml(&contents) {
            Ok(config) => {
                debug!("Loaded configuration from {:?}", path);
                Ok(config)
            }
            Err(e) => {
                warn!("Config file {:?} is unreadable: {}. Using defaults.", path, e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Persist the current configuration.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let yaml = self
            .config
            .to_yaml()
            .context("Failed to serialize configuration")?;
        fs::write(&self.config_path, yaml)
            .with_context(|| format!("Failed to write config file {:?}", self.config_path))?;

        debug!("Configuration saved to {:?}", self.config_path);
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Whether the navigation drawer button should be offered.
    pub fn show_menu(&self) -> bool {
        self.config.session.show_menu
    }

    /// Record the signed-in state that reveals the navigation drawer.
    pub fn set_show_menu(&mut self, show_menu: bool) -> Result<()> {
        self.config.session.show_menu = show_menu;
        self.save()
    }

    pub fn compact_mode(&self) -> bool {
        self.config.ui.compact_mode
    }

    /// Persist the dashboard layout preference.
    pub fn set_compact_mode(&mut self, compact: bool) -> Result<()> {
        self.config.ui.compact_mode = compact;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(dir.path().join("config.yml")).unwrap()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        assert!(!manager.show_menu());
        assert!(!manager.compact_mode());
    }

    #[test]
    fn test_setters_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");

        let mut manager = ConfigManager::with_path(path.clone()).unwrap();
        manager.set_show_menu(true).unwrap();
        manager.set_compact_mode(true).unwrap();

        let reloaded = ConfigManager::with_path(path).unwrap();
        assert!(reloaded.show_menu());
        assert!(reloaded.compact_mode());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.yml");

        let mut manager = ConfigManager::with_path(path.clone()).unwrap();
        manager.set_show_menu(true).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "ui: [definitely, not, a, map]").unwrap();

        let manager = ConfigManager::with_path(path).unwrap();
        assert!(!manager.compact_mode());
    }
}
