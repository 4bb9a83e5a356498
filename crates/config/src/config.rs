//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskdeck application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::log::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable overriding [`Config::tasks_file`].
pub const TASKS_FILE_ENV: &str = "TASKDECK_TASKS";

/// The main configuration struct for the taskdeck application.
///
/// # Examples
///
/// ```
/// use taskdeck_config::{Config, LogConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.tasks_file.is_none());
///
/// // Create a custom config
/// let config = Config {
///     tasks_file: Some("tasks.json5".into()),
///     log: LogConfig::to_file("taskdeck.log"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File holding the task collection.
    ///
    /// When unset, the application shows sample tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Log output configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Creates a new empty configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./taskdeck.json5` or `./taskdeck.json`
    /// 2. User: `~/.config/taskdeck/config.json5` or `~/.config/taskdeck/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// Environment overrides are applied on top of either.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskdeck_config::Config;
    ///
    /// # async fn example() -> taskdeck_config::Result<()> {
    /// let config = Config::load().await?;
    /// if let Some(path) = &config.tasks_file {
    ///     println!("Tasks from {}", path.display());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load_from(&path)?
            }
            None => Self::default(),
        };
        config.apply_env(std::env::var_os(TASKS_FILE_ENV).map(PathBuf::from));
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is unknown.
    pub fn validate(&self) -> Result<()> {
        self.log.validate()
    }

    /// Applies environment overrides.
    ///
    /// A tasks file given through the environment replaces the configured
    /// one; an empty value is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use taskdeck_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env(Some(PathBuf::from("/tmp/tasks.json")));
    /// assert_eq!(config.tasks_file, Some(PathBuf::from("/tmp/tasks.json")));
    /// ```
    pub fn apply_env(&mut self, tasks_file: Option<PathBuf>) {
        if let Some(path) = tasks_file.filter(|p| !p.as_os_str().is_empty()) {
            debug!(path = %path.display(), "tasks file overridden from environment");
            self.tasks_file = Some(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.tasks_file.is_none());
        assert!(!config.log.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn validate_invalid_log_level() {
        let config = Config {
            log: LogConfig {
                level: "chatty".to_string(),
                file: None,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_override_replaces_tasks_file() {
        let mut config = Config {
            tasks_file: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };

        config.apply_env(None);
        assert_eq!(config.tasks_file, Some(PathBuf::from("from-config.json")));

        config.apply_env(Some(PathBuf::new()));
        assert_eq!(config.tasks_file, Some(PathBuf::from("from-config.json")));

        config.apply_env(Some(PathBuf::from("from-env.json")));
        assert_eq!(config.tasks_file, Some(PathBuf::from("from-env.json")));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Where the board reads its tasks
                tasks_file: "tasks.json5",
                log: { level: "debug", file: "taskdeck.log" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.tasks_file, Some(PathBuf::from("tasks.json5")));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("taskdeck.log")));
    }

    #[test]
    fn load_from_rejects_unknown_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"log": {"level": "loud"}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            tasks_file: Some(PathBuf::from("tasks.json")),
            log: LogConfig::to_file("taskdeck.log"),
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn tasks_file_not_serialized_when_none() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("tasks_file"));
    }
}
