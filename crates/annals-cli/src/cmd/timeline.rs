//! `annals timeline` — the same selection as `list`, framed as a timeline.

use crate::cmd::{FilterArgs, load_store};
use crate::output::{OutputMode, pretty_section, render_mode, sanitize_line};
use annals_core::Event;
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

#[derive(Args, Debug)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run_timeline(args: &TimelineArgs, mode: OutputMode, data_path: &Path) -> anyhow::Result<()> {
    let store = load_store(data_path)?;
    let filter = args.filter.to_filter();
    let selection = filter.apply(store.events());
    let header = filter.summary(selection.len());

    render_mode(
        mode,
        &selection,
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
            write_timeline(events, w)
        },
    )
}

fn write_timeline(events: &[Event], w: &mut dyn Write) -> io::Result<()> {
    if events.is_empty() {
        writeln!(w, "No events found for this selection.")?;
        return Ok(());
    }
    for event in events {
        writeln!(w, "● {}", event.date_label())?;
        writeln!(w, "│   {}", sanitize_line(&event.title))?;
        if !event.description.is_empty() {
            writeln!(w, "│   {}", sanitize_line(&event.description))?;
        }
        writeln!(w, "│")?;
    }
    Ok(())
}
