//! Sample data for demonstration.
//!
//! This module provides a fixed set of tasks used by the binary when no
//! task file is configured. Due dates are placed relative to the current day
//! so that some cards show as overdue.
//!
//! # Examples
//!
//! ```
//! use taskdeck_protocol::dummy::dummy_tasks;
//!
//! let tasks = dummy_tasks();
//! assert_eq!(tasks.len(), 20);
//! assert!(tasks.iter().any(|t| t.due_date.is_none()));
//! ```

use chrono::{Duration, Utc};

use crate::task::{CardColor, Repeating, Task};

const DESCRIPTIONS: [&str; 5] = [
    "Study the theory",
    "Do homework",
    "Pass the intensive on the first try",
    "Review the pull request",
    "Plan the next sprint",
];

/// Generates the sample task collection.
///
/// Creates twenty tasks cycling through descriptions and colors. Every third
/// task has no deadline, every fourth repeats on weekdays, every seventh is a
/// favorite and the last one is archived.
#[must_use]
pub fn dummy_tasks() -> Vec<Task> {
    let now = Utc::now();

    (0..20)
        .map(|index: i64| {
            let position = index as usize;
            let mut task = Task::new(DESCRIPTIONS[position % DESCRIPTIONS.len()])
                .with_color(CardColor::ALL[position % CardColor::ALL.len()]);

            if index % 3 != 0 {
                // Spread deadlines a week either side of today
                task = task.with_due_date(now + Duration::days((index * 5) % 15 - 7));
            }
            if index % 4 == 1 {
                task = task.with_repeating(Repeating {
                    mo: true,
                    we: true,
                    fr: true,
                    ..Repeating::default()
                });
            }
            if index % 7 == 6 {
                task = task.favorite();
            }
            if index == 19 {
                task = task.archived();
            }
            task
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_tasks_mix_dated_and_undated() {
        let tasks = dummy_tasks();
        let undated = tasks.iter().filter(|t| t.due_date.is_none()).count();
        assert_eq!(undated, 7);
    }

    #[test]
    fn dummy_tasks_are_not_all_archived() {
        let tasks = dummy_tasks();
        assert_eq!(tasks.iter().filter(|t| t.is_archive).count(), 1);
    }

    #[test]
    fn dummy_task_ids_are_unique() {
        let tasks = dummy_tasks();
        let mut ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }
}
