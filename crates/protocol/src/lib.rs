//! Shared protocol types for the taskdeck application.
//!
//! This crate defines the core types used across all taskdeck components,
//! including tasks, sort modes, the due-date comparators and input messages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, colors, repeat patterns and the `Task` struct
//! - [`sort`]: Sort modes and the due-date comparators
//! - [`message`]: Host input messages
//! - [`dummy`]: Sample tasks for demonstration
//!
//! # Examples
//!
//! Ordering tasks by due date:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use taskdeck_protocol::{Task, compare_up};
//!
//! let mut tasks = vec![
//!     Task::new("No deadline"),
//!     Task::new("Later").with_due_date(Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap()),
//!     Task::new("Sooner").with_due_date(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
//! ];
//!
//! tasks.sort_by(compare_up);
//! let order: Vec<_> = tasks.iter().map(|t| t.description.as_str()).collect();
//! assert_eq!(order, ["Sooner", "Later", "No deadline"]);
//! ```

pub mod dummy;
pub mod message;
pub mod sort;
pub mod task;

// Re-export primary types at crate root for convenience
pub use message::Message;
pub use sort::{SortType, compare_down, compare_up};
pub use task::{CardColor, Repeating, Task, TaskId};
