//! `annals copy` — place the plaintext export on the system clipboard.
//!
//! Clipboard failure is not an error: the text is printed instead, with a
//! hint that the user can copy it manually. Headless environments hit this
//! path routinely.

use crate::cmd::{FilterArgs, load_store};
use crate::output::OutputMode;
use annals_core::export::to_plaintext;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct CopyArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run_copy(args: &CopyArgs, mode: OutputMode, data_path: &Path) -> anyhow::Result<()> {
    let store = load_store(data_path)?;
    let filter = args.filter.to_filter();
    let selection = filter.apply(store.events());
    let text = to_plaintext(&selection);

    match copy_to_clipboard(&text) {
        Ok(()) => {
            if mode.is_json() {
                println!("{{\"copied\": {}}}", selection.len());
            } else {
                println!("Copied {} events to clipboard", selection.len());
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "clipboard unavailable; printing instead");
            println!("{text}");
            eprintln!("(clipboard unavailable — select the text above to copy it manually)");
        }
    }
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
