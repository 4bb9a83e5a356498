//! Sort modes and due-date ordering.
//!
//! Tasks without a due date always sort after dated tasks, in both
//! directions. The default mode does not sort at all: it restores the
//! original order of the collection.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// How the board orders its tasks.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::SortType;
///
/// assert_eq!(SortType::from_key("date-up"), SortType::DateUp);
/// assert_eq!(SortType::DateDown.key(), "date-down");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortType {
    /// Original insertion order.
    #[default]
    Default,
    /// Earliest due date first.
    DateUp,
    /// Latest due date first.
    DateDown,
}

impl SortType {
    /// All sort modes, in the order the sort control lists them.
    pub const ALL: [SortType; 3] = [SortType::Default, SortType::DateUp, SortType::DateDown];

    /// Resolves a sort key as emitted by the sort control.
    ///
    /// Unknown keys fall back to [`SortType::Default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::SortType;
    ///
    /// assert_eq!(SortType::from_key("date-down"), SortType::DateDown);
    /// assert_eq!(SortType::from_key("by-color"), SortType::Default);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "date-up" => Self::DateUp,
            "date-down" => Self::DateDown,
            _ => Self::Default,
        }
    }

    /// Returns the key of this sort mode.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::DateUp => "date-up",
            Self::DateDown => "date-down",
        }
    }

    /// Returns the label shown on the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "SORT BY DEFAULT",
            Self::DateUp => "SORT BY DATE up",
            Self::DateDown => "SORT BY DATE down",
        }
    }
}

/// Orders a pair of due dates when at least one of them is absent.
///
/// Returns `None` when both dates are present, leaving the decision to the
/// caller.
fn weight_for_null_date(a: Option<&DateTime<Utc>>, b: Option<&DateTime<Utc>>) -> Option<Ordering> {
    match (a, b) {
        (None, None) => Some(Ordering::Equal),
        (None, Some(_)) => Some(Ordering::Greater),
        (Some(_), None) => Some(Ordering::Less),
        (Some(_), Some(_)) => None,
    }
}

/// Orders tasks by due date, earliest first, undated last.
#[must_use]
pub fn compare_up(a: &Task, b: &Task) -> Ordering {
    weight_for_null_date(a.due_date.as_ref(), b.due_date.as_ref())
        .unwrap_or_else(|| a.due_date.cmp(&b.due_date))
}

/// Orders tasks by due date, latest first, undated last.
#[must_use]
pub fn compare_down(a: &Task, b: &Task) -> Ordering {
    weight_for_null_date(a.due_date.as_ref(), b.due_date.as_ref())
        .unwrap_or_else(|| b.due_date.cmp(&a.due_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dated(description: &str, day: u32) -> Task {
        Task::new(description).with_due_date(Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap())
    }

    #[test]
    fn sort_type_keys_roundtrip() {
        for sort_type in SortType::ALL {
            assert_eq!(SortType::from_key(sort_type.key()), sort_type);
        }
    }

    #[test]
    fn unknown_sort_key_falls_back_to_default() {
        assert_eq!(SortType::from_key(""), SortType::Default);
        assert_eq!(SortType::from_key("DATE-UP"), SortType::Default);
    }

    #[test]
    fn sort_type_json_format() {
        let json = serde_json::to_string(&SortType::DateUp).expect("serialize");
        assert_eq!(json, r#""date-up""#);
    }

    #[test]
    fn undated_tasks_compare_equal() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_eq!(compare_up(&a, &b), Ordering::Equal);
        assert_eq!(compare_down(&a, &b), Ordering::Equal);
    }

    #[test]
    fn undated_tasks_sort_last_in_both_directions() {
        let undated = Task::new("undated");
        let due = dated("due", 3);

        assert_eq!(compare_up(&undated, &due), Ordering::Greater);
        assert_eq!(compare_up(&due, &undated), Ordering::Less);
        assert_eq!(compare_down(&undated, &due), Ordering::Greater);
        assert_eq!(compare_down(&due, &undated), Ordering::Less);
    }

    #[test]
    fn sorting_is_stable_among_undated_tasks() {
        let mut tasks = vec![
            Task::new("first undated"),
            dated("fifth", 5),
            Task::new("second undated"),
            dated("second", 2),
        ];

        tasks.sort_by(compare_down);
        let order: Vec<_> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, ["fifth", "second", "first undated", "second undated"]);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn arb_due_date() -> impl Strategy<Value = Option<DateTime<Utc>>> {
        proptest::option::of(
            (0i64..4_000_000_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap()),
        )
    }

    fn arb_task() -> impl Strategy<Value = Task> {
        arb_due_date().prop_map(|due_date| Task {
            due_date,
            ..Task::new("generated")
        })
    }

    proptest! {
        #[test]
        fn compare_up_follows_due_dates(a in arb_task(), b in arb_task()) {
            if let (Some(da), Some(db)) = (a.due_date, b.due_date) {
                prop_assert_eq!(compare_up(&a, &b) == Ordering::Less, da < db);
                prop_assert_eq!(compare_down(&a, &b), compare_up(&a, &b).reverse());
            }
        }

        #[test]
        fn undated_sorts_after_every_dated_task(a in arb_task()) {
            let undated = Task::new("undated");
            if a.due_date.is_some() {
                prop_assert_eq!(compare_up(&undated, &a), Ordering::Greater);
                prop_assert_eq!(compare_down(&undated, &a), Ordering::Greater);
            } else {
                prop_assert_eq!(compare_up(&undated, &a), Ordering::Equal);
                prop_assert_eq!(compare_down(&undated, &a), Ordering::Equal);
            }
        }

        #[test]
        fn comparators_are_antisymmetric(a in arb_task(), b in arb_task()) {
            prop_assert_eq!(compare_up(&a, &b), compare_up(&b, &a).reverse());
            prop_assert_eq!(compare_down(&a, &b), compare_down(&b, &a).reverse());
        }

        #[test]
        fn sorting_permutes_without_filtering(tasks in proptest::collection::vec(arb_task(), 0..20)) {
            let mut sorted = tasks.clone();
            sorted.sort_by(compare_up);
            prop_assert_eq!(sorted.len(), tasks.len());
            for task in &tasks {
                prop_assert!(sorted.iter().any(|t| t.id == task.id));
            }
            let first_undated = sorted.iter().position(|t| t.due_date.is_none()).unwrap_or(sorted.len());
            prop_assert!(sorted[first_undated..].iter().all(|t| t.due_date.is_none()));
        }
    }
}
