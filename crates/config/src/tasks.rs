//! Task file loading.
//!
//! A task file holds a JSON5 (or JSON) array of tasks. Only `description`
//! is required; ids are generated when missing and every other field takes
//! its default.
//!
//! ```json5
//! [
//!   { description: "Do homework", due_date: "2025-03-05T12:00:00Z", color: "yellow" },
//!   { description: "Water plants", repeating: { mo: true, th: true } },
//! ]
//! ```

use std::path::Path;

use taskdeck_protocol::Task;
use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::persistence::parse_json5;

/// Reads the task collection from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an array of tasks.
///
/// # Examples
///
/// ```no_run
/// use taskdeck_config::load_tasks;
///
/// # async fn example() -> taskdeck_config::Result<()> {
/// let tasks = load_tasks("tasks.json5").await?;
/// println!("{} tasks", tasks.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading task file");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::ReadTasks {
            path: path.to_path_buf(),
            source: e,
        })?;

    let tasks: Vec<Task> = parse_json5(&content)?;
    info!(count = tasks.len(), "tasks loaded");
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_protocol::CardColor;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_minimal_tasks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json5");
        std::fs::write(
            &path,
            r#"
            [
                // ids are optional
                { description: "Do homework", due_date: "2025-03-05T12:00:00Z", color: "yellow" },
                { description: "Water plants", repeating: { mo: true }, is_favorite: true },
            ]
            "#,
        )
        .unwrap();

        let tasks = load_tasks(&path).await.unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "Do homework");
        assert_eq!(tasks[0].color, CardColor::Yellow);
        assert!(tasks[0].due_date.is_some());
        assert!(tasks[1].is_repeating());
        assert!(tasks[1].is_favorite);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[tokio::test]
    async fn empty_array_is_an_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(load_tasks(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let result = load_tasks("/nonexistent/tasks.json").await;
        assert!(matches!(result, Err(ConfigError::ReadTasks { .. })));
    }

    #[tokio::test]
    async fn object_instead_of_array_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, r#"{"description": "alone"}"#).unwrap();

        let result = load_tasks(&path).await;
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }
}
