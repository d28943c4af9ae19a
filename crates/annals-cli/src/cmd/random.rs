//! `annals random` — pick a random month and a year from the dataset, then
//! show the matching selection.
//!
//! The month is uniform over 1-12; the year is drawn from the years that
//! actually occur in the store, so the result is rarely empty on real data
//! but can be (month/year combinations with no events are fine).

use crate::cmd::{list, load_store};
use crate::output::OutputMode;
use annals_core::rng::{RandomSource, SeededRng, ThreadRandom};
use annals_core::EventFilter;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Seed for a reproducible pick.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run_random(args: &RandomArgs, mode: OutputMode, data_path: &Path) -> anyhow::Result<()> {
    let store = load_store(data_path)?;
    let filter = match args.seed {
        Some(seed) => pick_filter(&store.years(), &mut SeededRng::new(seed)),
        None => pick_filter(&store.years(), &mut ThreadRandom),
    };
    let selection = filter.apply(store.events());
    tracing::debug!(?filter, hits = selection.len(), "random filter picked");
    list::render_selection(mode, &filter, &selection)
}

/// Uniform month plus a year sampled from the dataset's distinct years.
/// An empty store yields a month-only filter.
fn pick_filter(years: &[i32], rng: &mut impl RandomSource) -> EventFilter {
    let month = Some(rng.next_index(12) as u32 + 1);
    let year = years.get(rng.next_index(years.len())).copied();
    EventFilter::new(month, year)
}
