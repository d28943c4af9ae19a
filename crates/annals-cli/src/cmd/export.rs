//! `annals export` — write the filtered selection as a text artifact.
//!
//! The default filename is derived from the active filter labels
//! (`history_January_1990.csv`); `--output -` streams to stdout instead.

use crate::cmd::{FilterArgs, load_store};
use crate::output::OutputMode;
use annals_core::export::{self, ExportFormat};
use anyhow::Context as _;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// CLI-facing artifact format names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Txt,
    Csv,
    Json,
}

impl ExportKind {
    pub const fn to_format(self) -> ExportFormat {
        match self {
            Self::Txt => ExportFormat::Plaintext,
            Self::Csv => ExportFormat::Csv,
            Self::Json => ExportFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Artifact format to write.
    #[arg(short = 't', long = "to", value_enum)]
    pub to: ExportKind,

    /// Output path; "-" streams to stdout. Defaults to a filename derived
    /// from the filter labels.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    path: String,
    events: usize,
}

pub fn run_export(args: &ExportArgs, mode: OutputMode, data_path: &Path) -> anyhow::Result<()> {
    let store = load_store(data_path)?;
    let filter = args.filter.to_filter();
    let selection = filter.apply(store.events());
    let format = args.to.to_format();
    let content = export::render(&selection, format).context("failed to render export")?;

    if args.output.as_deref() == Some(Path::new("-")) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(content.as_bytes())?;
        writeln!(out)?;
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export::export_filename(&filter, format)));
    fs::write(&path, &content)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::info!(path = %path.display(), events = selection.len(), "export written");

    let report = ExportReport {
        path: path.display().to_string(),
        events: selection.len(),
    };
    if mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Wrote {} events to {}", report.events, report.path);
    }
    Ok(())
}
