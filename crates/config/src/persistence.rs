//! Configuration file discovery, reading and writing.
//!
//! Files are read as JSON5, which also accepts plain JSON, and written back
//! as pretty-printed JSON since `serde_json5` cannot serialize.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./taskdeck.json5` or `./taskdeck.json`
//! 2. User: `~/.config/taskdeck/config.json5` or `~/.config/taskdeck/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["taskdeck.json5", "taskdeck.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "taskdeck";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the first existing configuration file.
///
/// # Examples
///
/// ```no_run
/// use taskdeck_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the user configuration directory, typically `~/.config/taskdeck/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("config.json5"))
}

/// Parses JSON5 (or JSON) content.
///
/// # Errors
///
/// Returns an error if the content does not parse into `T`.
pub fn parse_json5<T: serde::de::DeserializeOwned>(content: &str) -> Result<T> {
    serde_json5::from_str(content).map_err(ConfigError::from)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_json5(&content)
}

/// Writes a value to a file as pretty-printed JSON.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{"name": "sample", "value": 42}"#).unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.name, "sample");
        assert_eq!(sample.value, 42);
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comments are allowed
                name: "sample",
                value: 42,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.value, 42);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<Sample> = read_config_file("/nonexistent/path.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<Sample> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dirs").join("config.json");

        let sample = Sample {
            name: "sample".to_string(),
            value: 42,
        };

        write_config_file(&path, &sample).unwrap();
        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn user_config_dir_ends_with_app_name() {
        if dirs::config_dir().is_some() {
            let dir = user_config_dir().unwrap();
            assert!(dir.ends_with(USER_CONFIG_DIR));
            assert!(default_user_config_path().unwrap().starts_with(dir));
        }
    }
}
