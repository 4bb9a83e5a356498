//! Configuration management for the taskdeck application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults), and reads
//! the task files the board is started with.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`log`]: Log output configuration
//! - [`tasks`]: Task file loading
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`TASKDECK_TASKS`)
//! 2. Local config (`./taskdeck.json5` or `./taskdeck.json`)
//! 3. User config (`~/.config/taskdeck/config.json5` or `~/.config/taskdeck/config.json`)
//! 4. Built-in defaults
//!
//! ```json5
//! {
//!   tasks_file: "~/tasks.json5",
//!   log: { level: "debug", file: "/tmp/taskdeck.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskdeck_config::{Config, load_tasks};
//!
//! # async fn example() -> taskdeck_config::Result<()> {
//! let config = Config::load().await?;
//! if let Some(path) = &config.tasks_file {
//!     let tasks = load_tasks(path).await?;
//!     println!("{} tasks", tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod log;
pub mod persistence;
pub mod tasks;

// Re-export primary types at crate root for convenience
pub use config::{Config, TASKS_FILE_ENV};
pub use error::{ConfigError, Result};
pub use log::LogConfig;
pub use tasks::load_tasks;
