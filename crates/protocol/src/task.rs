//! Task-related types for the board.
//!
//! This module defines the task structure rendered by the board, along with
//! the helpers used to present its due date and repeat pattern.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// The color tag of a task card.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::CardColor;
///
/// assert_eq!(CardColor::default(), CardColor::Black);
/// assert_eq!(CardColor::Pink.as_str(), "pink");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    #[default]
    Black,
    Yellow,
    Blue,
    Green,
    Pink,
}

impl CardColor {
    /// All card colors, in palette order.
    pub const ALL: [CardColor; 5] = [
        CardColor::Black,
        CardColor::Yellow,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Pink,
    ];

    /// Returns the lowercase name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Pink => "pink",
        }
    }
}

/// Weekdays on which a task repeats.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Repeating;
///
/// assert!(!Repeating::default().is_repeating());
/// assert!(Repeating { we: true, ..Repeating::default() }.is_repeating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Repeating {
    #[serde(default)]
    pub mo: bool,
    #[serde(default)]
    pub tu: bool,
    #[serde(default)]
    pub we: bool,
    #[serde(default)]
    pub th: bool,
    #[serde(default)]
    pub fr: bool,
    #[serde(default)]
    pub sa: bool,
    #[serde(default)]
    pub su: bool,
}

impl Repeating {
    /// Returns `true` if the task repeats on at least one weekday.
    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.mo || self.tu || self.we || self.th || self.fr || self.sa || self.su
    }
}

/// A task shown on the board.
///
/// A task without a due date has no deadline; such tasks always sort after
/// dated ones.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{CardColor, Task};
///
/// let task = Task::new("Buy groceries");
/// assert_eq!(task.color, CardColor::Black);
/// assert!(task.due_date.is_none());
/// assert!(!task.is_archive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    ///
    /// Generated when a task file leaves it out.
    #[serde(default = "TaskId::new_v4")]
    pub id: TaskId,
    /// What needs to be done.
    pub description: String,
    /// Deadline, if any.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Weekdays on which the task repeats.
    #[serde(default)]
    pub repeating: Repeating,
    /// Color tag of the card.
    #[serde(default)]
    pub color: CardColor,
    /// Whether the task has been archived.
    #[serde(default)]
    pub is_archive: bool,
    /// Whether the task has been marked as a favorite.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Task {
    /// Creates a new task with the given description.
    ///
    /// The task has no deadline, does not repeat, and is neither archived nor
    /// a favorite.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_id(TaskId::new_v4(), description)
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for testing or when recreating tasks from a file.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Test task");
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            due_date: None,
            repeating: Repeating::default(),
            color: CardColor::default(),
            is_archive: false,
            is_favorite: false,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the card color.
    #[must_use]
    pub fn with_color(mut self, color: CardColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the repeat pattern.
    #[must_use]
    pub fn with_repeating(mut self, repeating: Repeating) -> Self {
        self.repeating = repeating;
        self
    }

    /// Marks the task as archived.
    #[must_use]
    pub fn archived(mut self) -> Self {
        self.is_archive = true;
        self
    }

    /// Marks the task as a favorite.
    #[must_use]
    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Returns `true` if the task's deadline has passed as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        is_expired(self.due_date, now)
    }

    /// Returns `true` if the task repeats on at least one weekday.
    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        self.repeating.is_repeating()
    }
}

/// Returns the last millisecond of the UTC day containing `now`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use taskdeck_protocol::task::end_of_day;
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 5, 8, 15, 0).unwrap();
/// let end = end_of_day(now);
/// assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
/// ```
#[must_use]
pub fn end_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = Utc
        .with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
        .single()
        .unwrap_or(now);
    midnight + Duration::days(1) - Duration::milliseconds(1)
}

/// Returns `true` if `due` lies before the end of the current day.
///
/// A task without a deadline never expires.
#[must_use]
pub fn is_expired(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    due.is_some_and(|due| end_of_day(now) > due)
}

/// Returns `true` if `due` is exactly the end of the current day.
#[must_use]
pub fn is_due_today(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    due.is_some_and(|due| end_of_day(now) == due)
}

/// Formats a due date as day and full month name, e.g. `5 March`.
///
/// Returns an empty string for a task without a deadline.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use taskdeck_protocol::task::format_due_date;
///
/// let due = Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
/// assert_eq!(format_due_date(Some(due)), "5 March");
/// assert_eq!(format_due_date(None), "");
/// ```
#[must_use]
pub fn format_due_date(due: Option<DateTime<Utc>>) -> String {
    due.map(|due| due.format("%-d %B").to_string())
        .unwrap_or_default()
}

/// Returns `true` if both dates fall on the same day, or both are absent.
#[must_use]
pub fn dates_equal(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.date_naive() == b.date_naive(),
        _ => false,
    }
}
