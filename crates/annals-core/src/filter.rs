//! Filter engine and the canonical event ordering.
//!
//! Filtering is a pure projection: it never mutates the store and always
//! returns a freshly derived, canonically ordered selection. The explorer
//! replaces its whole selection on every filter change instead of patching
//! it incrementally.

use crate::event::{Event, month_name};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Canonical total order over events: year ascending, then month ascending
/// (absent sorts as 0, before any real month), then day ascending (absent
/// as 0). Ties keep their original relative order when used with a stable
/// sort.
#[must_use]
pub fn canonical_cmp(a: &Event, b: &Event) -> Ordering {
    a.year
        .cmp(&b.year)
        .then_with(|| a.month.unwrap_or(0).cmp(&b.month.unwrap_or(0)))
        .then_with(|| a.day.unwrap_or(0).cmp(&b.day.unwrap_or(0)))
}

/// Month/year filter criteria. Both predicates apply conjunctively; an unset
/// field matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Keep only events in this month (1-12).
    pub month: Option<u32>,
    /// Keep only events in this year.
    pub year: Option<i32>,
}

impl EventFilter {
    #[must_use]
    pub const fn new(month: Option<u32>, year: Option<i32>) -> Self {
        Self { month, year }
    }

    /// Returns true when no criteria are active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }

    /// Returns true if the event satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(month) = self.month {
            if event.month != Some(month) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if event.year != year {
                return false;
            }
        }
        true
    }

    /// Apply the filter, returning a new canonically ordered selection.
    #[must_use]
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        let mut selection: Vec<Event> = events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect();
        selection.sort_by(canonical_cmp);
        selection
    }

    /// Month label for headers and filenames: `"January"` or `"Any month"`.
    #[must_use]
    pub fn month_label(&self) -> &'static str {
        self.month.and_then(month_name).unwrap_or("Any month")
    }

    /// Year label for headers: `"1969"` or `"any year"`.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year
            .map_or_else(|| "any year".to_string(), |year| year.to_string())
    }

    /// Header line for a selection of `count` events, matching the explorer's
    /// results title: `Results for: January, any year — 3 events`.
    #[must_use]
    pub fn summary(&self, count: usize) -> String {
        let plural = if count == 1 { "" } else { "s" };
        format!(
            "Results for: {}, {} — {count} event{plural}",
            self.month_label(),
            self.year_label()
        )
    }
}
