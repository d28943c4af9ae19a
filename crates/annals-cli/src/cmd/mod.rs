//! Command handlers for the `annals` CLI.

pub mod copy;
pub mod export;
pub mod list;
pub mod quiz;
pub mod random;
pub mod timeline;

use annals_core::{EventFilter, EventStore};
use anyhow::Context as _;
use clap::Args;
use std::path::Path;

/// Month/year filter flags shared by every selection-consuming command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FilterArgs {
    /// Keep only events in this month (1-12).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Keep only events in this year.
    #[arg(short, long, allow_hyphen_values = true)]
    pub year: Option<i32>,
}

impl FilterArgs {
    pub fn to_filter(self) -> EventFilter {
        EventFilter::new(self.month, self.year)
    }
}

/// Load the event store, attaching CLI-friendly context to load failures.
pub fn load_store(data_path: &Path) -> anyhow::Result<EventStore> {
    let store = EventStore::load(data_path)
        .with_context(|| format!("could not load events from {}", data_path.display()))?;
    tracing::info!(events = store.len(), "event store loaded");
    Ok(store)
}
