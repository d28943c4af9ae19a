//! The event model and the immutable in-memory store.
//!
//! Events come from a single JSON array read once at startup. Source records
//! are loosely typed (years as numbers or numeric strings, `0`/`null` dates),
//! so loading runs every record through a normalization pass before the store
//! is sealed. The store is never mutated after [`EventStore::load`] returns.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// English month names, indexed by `month - 1`.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 1-based month number, or `None` when out of range.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(idx).copied()
}

/// A single dated historical occurrence. Immutable once loaded.
///
/// `month` and `day` are optional; an event with only a `year` is valid.
/// Serialization keeps this declaration order so JSON exports are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub source: Option<String>,
}

impl Event {
    /// Human-readable date: zero-padded day, month name, year, space-joined,
    /// absent parts omitted. `"01 January 1990"`, `"July 1969"`, `"1985"`.
    #[must_use]
    pub fn date_label(&self) -> String {
        let mut label = String::new();
        if let Some(day) = self.day {
            let _ = write!(label, "{day:02} ");
        }
        if let Some(name) = self.month.and_then(month_name) {
            let _ = write!(label, "{name} ");
        }
        let _ = write!(label, "{}", self.year);
        label
    }

    /// Date label used by quiz prompts: month name (if any) plus year.
    /// The day is intentionally omitted so prompts don't give the answer away.
    #[must_use]
    pub fn quiz_date_label(&self) -> String {
        match self.month.and_then(month_name) {
            Some(name) => format!("{name} {}", self.year),
            None => self.year.to_string(),
        }
    }
}

/// Raw source record before normalization. Fields are permissive on purpose:
/// the original data mixes numbers with numeric strings and uses `0`/`null`
/// interchangeably for "absent".
#[derive(Debug, Deserialize)]
struct RawEvent {
    id: Option<u64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    year: Option<Value>,
    month: Option<Value>,
    day: Option<Value>,
    category: Option<String>,
    region: Option<String>,
    source: Option<String>,
}

/// Numeric coercion: accepts JSON numbers and numeric strings.
fn coerce_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce an optional date part; falsy values (missing, null, 0) are absent.
fn coerce_date_part(value: Option<&Value>) -> Option<u32> {
    let n = coerce_i64(value)?;
    if n <= 0 {
        return None;
    }
    u32::try_from(n).ok()
}

/// Empty optional strings are treated as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl RawEvent {
    /// Normalize into an [`Event`]. `fallback_id` is the 1-based position in
    /// the source array, used when the record carries no id of its own.
    /// Returns `None` when the record has no parseable year.
    fn normalize(self, fallback_id: u64) -> Option<Event> {
        let year = i32::try_from(coerce_i64(self.year.as_ref())?).ok()?;
        Some(Event {
            id: self.id.unwrap_or(fallback_id),
            title: self.title,
            description: self.description,
            year,
            month: coerce_date_part(self.month.as_ref()),
            day: coerce_date_part(self.day.as_ref()),
            category: non_empty(self.category),
            region: non_empty(self.region),
            source: non_empty(self.source),
        })
    }
}

/// The normalized, immutable list of all events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Load and normalize the JSON array at `path`.
    ///
    /// Records without a parseable year are dropped with a warning; the
    /// original explorer would carry them as NaN-dated garbage instead.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&raw).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(events = store.len(), path = %path.display(), "loaded event store");
        Ok(store)
    }

    /// Parse and normalize from a JSON string.
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let records: Vec<RawEvent> = serde_json::from_str(raw)?;
        let total = records.len();
        let events: Vec<Event> = records
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| record.normalize(idx as u64 + 1))
            .collect();
        if events.len() < total {
            tracing::warn!(
                dropped = total - events.len(),
                "dropped event records without a parseable year"
            );
        }
        Ok(Self { events })
    }

    /// Build a store directly from normalized events.
    #[must_use]
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct years present in the store, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.events.iter().map(|e| e.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
