#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use clap::{Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "annals: explore, quiz on, and export dated historical events",
    long_about = None
)]
struct Cli {
    /// Path to the events JSON dataset.
    #[arg(long, global = true, env = "ANNALS_DATA", default_value = "events.json")]
    data: PathBuf,

    /// Output format (defaults to pretty on a TTY, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "List events matching the filter",
        long_about = "List events matching the month/year filter in canonical date order.",
        after_help = "EXAMPLES:\n    # Everything that happened in July\n    annals list --month 7\n\n    # A single month of a single year\n    annals list -m 7 -y 1969\n\n    # Emit machine-readable output\n    annals list -m 7 --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Read",
        about = "Render the filtered events as a timeline",
        long_about = "Render the month/year selection as a vertical timeline.",
        after_help = "EXAMPLES:\n    # Timeline of a whole year\n    annals timeline --year 1989\n\n    # Emit machine-readable output\n    annals timeline -y 1989 --json"
    )]
    Timeline(cmd::timeline::TimelineArgs),

    #[command(
        next_help_heading = "Read",
        about = "Show a random month/year selection",
        long_about = "Pick a random month and a year from the dataset, then list the matching events.",
        after_help = "EXAMPLES:\n    # Surprise me\n    annals random\n\n    # Reproducible pick\n    annals random --seed 7"
    )]
    Random(cmd::random::RandomArgs),

    #[command(
        next_help_heading = "Quiz",
        about = "Play a multiple-choice quiz",
        long_about = "Generate multiple-choice questions from the filtered events and play them interactively on stdin.",
        after_help = "EXAMPLES:\n    # Five questions over the whole dataset\n    annals quiz\n\n    # Ten questions about 1969, reproducibly\n    annals quiz -n 10 -y 1969 --seed 42\n\n    # Emit the questions as JSON without playing\n    annals quiz --json"
    )]
    Quiz(cmd::quiz::QuizArgs),

    #[command(
        next_help_heading = "Share",
        about = "Export the selection to a file",
        long_about = "Write the filtered selection as plaintext, CSV, or JSON.",
        after_help = "EXAMPLES:\n    # CSV with a derived filename (history_July_1969.csv)\n    annals export -m 7 -y 1969 --to csv\n\n    # Plaintext to stdout\n    annals export --to txt --output -"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        next_help_heading = "Share",
        about = "Copy the selection to the clipboard",
        long_about = "Place the plaintext rendering of the filtered selection on the system clipboard.",
        after_help = "EXAMPLES:\n    # Copy July 1969\n    annals copy -m 7 -y 1969"
    )]
    Copy(cmd::copy::CopyArgs),

    #[command(
        next_help_heading = "Interactive",
        about = "Open the interactive explorer",
        long_about = "Open the full-screen explorer with list, timeline, and quiz views. Starts filtered to the current month.",
        after_help = "EXAMPLES:\n    # Browse the default dataset\n    annals browse\n\n    # Browse another dataset\n    annals browse --data events/science.json"
    )]
    Browse,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "annals=debug,info"
    } else if quiet {
        "annals=error"
    } else {
        "annals=info,warn"
    };
    let filter =
        EnvFilter::try_from_env("ANNALS_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let format = env::var("ANNALS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mode = resolve_output_mode(cli.format, cli.json);
    let data = cli.data.as_path();

    match cli.command {
        Commands::List(ref args) => cmd::list::run_list(args, mode, data),
        Commands::Timeline(ref args) => cmd::timeline::run_timeline(args, mode, data),
        Commands::Random(ref args) => cmd::random::run_random(args, mode, data),
        Commands::Quiz(ref args) => cmd::quiz::run_quiz(args, mode, data),
        Commands::Export(ref args) => cmd::export::run_export(args, mode, data),
        Commands::Copy(ref args) => cmd::copy::run_copy(args, mode, data),
        Commands::Browse => tui::explorer::run(data),
    }
}
