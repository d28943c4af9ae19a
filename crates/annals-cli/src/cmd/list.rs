//! `annals list` — print the filtered selection in canonical order.

use crate::cmd::{FilterArgs, load_store};
use crate::output::{OutputMode, pretty_section, render_mode, sanitize_line};
use annals_core::{Event, EventFilter};
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run_list(args: &ListArgs, mode: OutputMode, data_path: &Path) -> anyhow::Result<()> {
    let store = load_store(data_path)?;
    let filter = args.filter.to_filter();
    let selection = filter.apply(store.events());
    render_selection(mode, &filter, &selection)
}

/// Shared renderer, also used by `annals random`.
pub fn render_selection(
    mode: OutputMode,
    filter: &EventFilter,
    selection: &[Event],
) -> anyhow::Result<()> {
    let header = filter.summary(selection.len());
    render_mode(
        mode,
        &selection.to_vec(),
        |events, w| {
            for event in events {
                writeln!(
                    w,
                    "{}\t{}\t{}",
                    event.date_label(),
                    sanitize_line(&event.title),
                    sanitize_line(&event.description)
                )?;
            }
            Ok(())
        },
        |events, w| {
            pretty_section(w, &header)?;
            write_pretty_events(events, w)
        },
    )
}

fn write_pretty_events(events: &[Event], w: &mut dyn Write) -> io::Result<()> {
    if events.is_empty() {
        writeln!(w, "No events found for this selection.")?;
        return Ok(());
    }
    for event in events {
        writeln!(
            w,
            "{} — {}",
            event.date_label(),
            sanitize_line(&event.title)
        )?;
        if !event.description.is_empty() {
            writeln!(w, "    {}", sanitize_line(&event.description))?;
        }
        writeln!(w)?;
    }
    Ok(())
}
