//! Test utilities for the TUI crate.
//!
//! Common helpers used across test modules for rendering verification and
//! for building task collections with known due dates.

use chrono::{Duration, TimeZone, Utc};
use ratatui::buffer::Buffer;
use taskdeck_protocol::Task;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Creates a task due `day` days after a fixed reference date.
#[must_use]
pub(crate) fn dated_task(description: &str, day: i64) -> Task {
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    Task::new(description).with_due_date(base + Duration::days(day))
}

/// Ten active tasks: seven dated in shuffled order and three undated.
#[must_use]
pub(crate) fn scenario_tasks() -> Vec<Task> {
    vec![
        dated_task("day 5", 5),
        Task::new("undated A"),
        dated_task("day 2", 2),
        dated_task("day 7", 7),
        Task::new("undated B"),
        dated_task("day 1", 1),
        dated_task("day 6", 6),
        dated_task("day 3", 3),
        Task::new("undated C"),
        dated_task("day 4", 4),
    ]
}
