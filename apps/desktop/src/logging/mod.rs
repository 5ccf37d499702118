//! Logging setup for the Bajeti desktop app
//!
//! Console and file logging are layered through `tracing-subscriber`.
//! Defaults come from environment presets (development vs production);
//! an optional `logging.yml` next to the app config can override either
//! preset per environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Which runtime environment the app was launched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Determine the runtime environment.
///
/// `BAJETI_ENV` wins, then `RUST_ENV`; otherwise debug builds count as
/// development and release builds as production.
pub fn get_environment() -> Environment {
    let from_var = std::env::var("BAJETI_ENV")
        .or_else(|_| std::env::var("RUST_ENV"))
        .ok();

    match from_var.as_deref() {
        Some("production") => Environment::Production,
        Some("development") => Environment::Development,
        Some(other) => {
            warn!("Unknown environment '{}', assuming development", other);
            Environment::Development
        }
        None => {
            if cfg!(debug_assertions) {
                Environment::Development
            } else {
                Environment::Production
            }
        }
    }
}

/// Per-environment logging profile as written in `logging.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YamlLoggingConfig {
    #[serde(default)]
    pub console_level: Option<String>,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub enable_console: Option<bool>,
    #[serde(default)]
    pub enable_file: Option<bool>,
    #[serde(default)]
    pub max_files: Option<usize>,
}

/// Resolved logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Base name for the rolling log file
    pub log_file_name: String,
    /// Console filter directive, e.g. "debug" or "bajeti=trace"
    pub console_level: String,
    /// File filter directive
    pub file_level: String,
    pub enable_console: bool,
    pub enable_file: bool,
    /// How many rotated files to keep
    pub max_files: usize,
    pub include_thread_ids: bool,
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_file_name: "bajeti".to_string(),
            console_level: "info".to_string(),
            file_level: "debug".to_string(),
            enable_console: true,
            enable_file: true,
            max_files: 5,
            include_thread_ids: false,
            include_source_location: false,
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".local").join("share")
        })
        .join("bajeti")
        .join("logs")
}

impl LoggingConfig {
    /// Verbose settings for local development.
    pub fn development() -> Self {
        Self {
            console_level: "debug".to_string(),
            file_level: "trace".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Quiet console, informative file log.
    pub fn production() -> Self {
        Self {
            console_level: "warn".to_string(),
            file_level: "info".to_string(),
            max_files: 10,
            ..Default::default()
        }
    }

    /// The preset for an environment.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        }
    }

    /// Overlay an optional YAML profile on top of this configuration.
    pub fn apply_overrides(mut self, overrides: &YamlLoggingConfig) -> Self {
        if let Some(level) = &overrides.console_level {
            self.console_level = level.clone();
        }
        if let Some(level) = &overrides.file_level {
            self.file_level = level.clone();
        }
        if let Some(enable) = overrides.enable_console {
            self.enable_console = enable;
        }
        if let Some(enable) = overrides.enable_file {
            self.enable_file = enable;
        }
        if let Some(max_files) = overrides.max_files {
            self.max_files = max_files;
        }
        self
    }
}

/// Load per-environment overrides from a `logging.yml` file.
///
/// The file maps environment names to profiles; a `default` entry applies
/// when the current environment has no entry of its own.
pub fn load_overrides(config_path: &Path, environment: Environment) -> Result<YamlLoggingConfig> {
    let contents = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read logging config {:?}", config_path))?;

    let profiles: HashMap<String, YamlLoggingConfig> = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse logging config {:?}", config_path))?;

    let key = match environment {
        Environment::Development => "development",
        Environment::Production => "production",
    };

    profiles
        .get(key)
        .or_else(|| profiles.get("default"))
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No logging profile for environment '{}' and no default entry",
                key
            )
        })
}

/// Initialize logging with the given configuration.
pub fn initialize_logging(config: &LoggingConfig) -> Result<()> {
    if config.enable_file {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
    }

    let mut layers = Vec::new();

    if config.enable_console {
        let console_filter =
            EnvFilter::try_new(&config.console_level).unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_writer(std::io::stdout)
            .with_filter(console_filter);

        layers.push(console_layer.boxed());
    }

    if config.enable_file {
        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("debug"));

        let file_appender =
            tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!(
        "Logging initialized (console: {} at {}, file: {} at {})",
        config.enable_console, config.console_level, config.enable_file, config.file_level
    );

    if config.enable_file {
        if let Err(e) = cleanup_old_logs(&config.log_dir, &config.log_file_name, config.max_files)
        {
            warn!("Failed to clean up old log files: {}", e);
        }
    }

    Ok(())
}

/// Remove rotated log files beyond the retention count, oldest first.
pub fn cleanup_old_logs(log_dir: &Path, base_name: &str, keep: usize) -> Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let mut log_files: Vec<_> = fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory {:?}", log_dir))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with(base_name)
        })
        .filter_map(|entry| {
            let modified = entry.metadata().ok()?.modified().ok()?;
            Some((entry.path(), modified))
        })
        .collect();

    if log_files.len() <= keep {
        return Ok(0);
    }

    // Oldest first
    log_files.sort_by_key(|(_, modified)| *modified);

    let excess = log_files.len() - keep;
    let mut removed = 0;
    for (path, _) in log_files.into_iter().take(excess) {
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!("Failed to remove old log file {:?}: {}", path, e),
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.console_level, "info");
        assert!(config.enable_console);
        assert!(config.enable_file);
    }

    #[test]
    fn test_presets_differ() {
        let dev = LoggingConfig::development();
        let prod = LoggingConfig::production();
        assert_eq!(dev.console_level, "debug");
        assert_eq!(prod.console_level, "warn");
        assert!(dev.include_source_location);
        assert!(!prod.include_source_location);
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = YamlLoggingConfig {
            console_level: Some("trace".to_string()),
            file_level: None,
            enable_console: None,
            enable_file: Some(false),
            max_files: Some(3),
        };

        let config = LoggingConfig::development().apply_overrides(&overrides);
        assert_eq!(config.console_level, "trace");
        assert_eq!(config.file_level, "trace");
        assert!(!config.enable_file);
        assert_eq!(config.max_files, 3);
    }

    #[test]
    fn test_load_overrides_picks_environment_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.yml");
        fs::write(
            &path,
            "development:\n  console_level: trace\nproduction:\n  console_level: error\n",
        )
        .unwrap();

        let overrides = load_overrides(&path, Environment::Production).unwrap();
        assert_eq!(overrides.console_level.as_deref(), Some("error"));
    }

    #[test]
    fn test_load_overrides_falls_back_to_default_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.yml");
        fs::write(&path, "default:\n  enable_file: false\n").unwrap();

        let overrides = load_overrides(&path, Environment::Development).unwrap();
        assert_eq!(overrides.enable_file, Some(false));
    }

    #[test]
    fn test_load_overrides_missing_entry_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.yml");
        fs::write(&path, "staging:\n  console_level: info\n").unwrap();

        assert!(load_overrides(&path, Environment::Development).is_err());
    }

    #[test]
    fn test_cleanup_keeps_newest_files() {
        let dir = TempDir::new().unwrap();
        for i in 0..6 {
            let path = dir.path().join(format!("bajeti.2024-01-0{}", i + 1));
            fs::write(&path, "log").unwrap();
        }

        let removed = cleanup_old_logs(dir.path(), "bajeti", 4).unwrap();
        assert_eq!(removed, 2);

        let remaining = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(remaining, 4);
    }

    #[test]
    fn test_cleanup_missing_dir_is_noop() {
        let removed = cleanup_old_logs(Path::new("/nonexistent/bajeti-logs"), "bajeti", 5).unwrap();
        assert_eq!(removed, 0);
    }
}
