//! Log output configuration.
//!
//! The terminal belongs to the UI, so log records only ever go to a file.
//! Without a configured file nothing is logged.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in the configuration.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use taskdeck_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.file.is_none());
///
/// let config = LogConfig::to_file("taskdeck.log");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level of the records written.
    ///
    /// Overridden by the `TASKDECK_LOG` filter when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// File receiving log records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Creates a configuration logging at the default level to `file`.
    #[must_use]
    pub fn to_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// Returns whether log output is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Validates the log level.
    ///
    /// Levels are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unknown level.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled_at_info() {
        let config = LogConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn every_known_level_is_valid() {
        for level in LOG_LEVELS {
            let config = LogConfig {
                level: (*level).to_string(),
                file: None,
            };
            assert!(config.validate().is_ok(), "{level} rejected");
        }
    }

    #[test]
    fn levels_are_case_insensitive() {
        let config = LogConfig {
            level: "DEBUG".to_string(),
            file: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LogConfig {
            level: "verbose".to_string(),
            file: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel { level }) if level == "verbose"
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: LogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn file_not_serialized_when_none() {
        let json = serde_json::to_string(&LogConfig::default()).unwrap();
        assert!(!json.contains("file"));
    }
}
