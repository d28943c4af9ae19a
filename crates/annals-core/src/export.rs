//! Export formatters: plaintext, CSV, and JSON renditions of a selection.
//!
//! These are direct structural transforms. Field values pass through
//! verbatim; only the framing (quoting, separators, indentation) differs
//! between formats.

use crate::event::{Event, month_name};
use crate::filter::EventFilter;
use std::fmt::Write as _;

/// The three downloadable artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Plaintext,
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Plaintext => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// CSV header row, matching the event field order minus `id`.
pub const CSV_HEADER: &str = "day,month,year,title,description,category,region,source";

/// Render a selection in the given format.
pub fn render(
    events: &[Event],
    format: ExportFormat,
) -> std::result::Result<String, serde_json::Error> {
    match format {
        ExportFormat::Plaintext => Ok(to_plaintext(events)),
        ExportFormat::Csv => Ok(to_csv(events)),
        ExportFormat::Json => to_json(events),
    }
}

/// `"<date> — <title>\n<description>"` per event, blank-line separated.
/// An empty selection renders as the empty string.
#[must_use]
pub fn to_plaintext(events: &[Event]) -> String {
    events
        .iter()
        .map(|event| {
            format!(
                "{} — {}\n{}",
                event.date_label(),
                event.title,
                event.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// CSV with every field double-quoted and internal quotes doubled.
/// Absent optional fields render as empty strings.
#[must_use]
pub fn to_csv(events: &[Event]) -> String {
    let mut out = String::from(CSV_HEADER);
    for event in events {
        out.push('\n');
        let fields = [
            opt_number(event.day),
            opt_number(event.month),
            event.year.to_string(),
            event.title.clone(),
            event.description.clone(),
            event.category.clone().unwrap_or_default(),
            event.region.clone().unwrap_or_default(),
            event.source.clone().unwrap_or_default(),
        ];
        let row = fields
            .iter()
            .map(|field| csv_quote(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
    }
    out
}

/// Pretty-printed JSON array with stable field order.
pub fn to_json(events: &[Event]) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(events)
}

/// Derived artifact filename: `history_<Month>_<Year>.<ext>`, whitespace in
/// the filter labels replaced with underscores.
#[must_use]
pub fn export_filename(filter: &EventFilter, format: ExportFormat) -> String {
    let month = filter.month.and_then(month_name).unwrap_or("AnyMonth");
    let year = filter
        .year
        .map_or_else(|| "AnyYear".to_string(), |year| year.to_string());
    let mut base = String::new();
    let _ = write!(base, "history_{month}_{year}");
    let sanitized = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{sanitized}.{}", format.extension())
}

fn opt_number(value: Option<u32>) -> String {
    value.map_or_else(String::new, |n| n.to_string())
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
