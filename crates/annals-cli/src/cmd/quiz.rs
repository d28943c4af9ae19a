//! `annals quiz` — generate and play a multiple-choice quiz on stdin/stdout.
//!
//! With `--json` the generated questions (including `correct` flags) are
//! emitted without interaction, which is also what scripts and tests use.
//! Scoring happens only after every question has been answered; answers are
//! never graded one at a time.

use crate::cmd::{FilterArgs, load_store};
use crate::output::{OutputMode, sanitize_line};
use annals_core::quiz::{Question, QuizParams, clamp_count, generate};
use annals_core::rng::{SeededRng, ThreadRandom};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Args, Debug)]
pub struct QuizArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of questions to generate (clamped to the pool size, max 15).
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    /// Seed for reproducible question generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a question asks for a year rather than a title.
    #[arg(long, default_value = "0.5")]
    pub year_guess_bias: f64,
}

pub fn run_quiz(args: &QuizArgs, mode: OutputMode, data_path: &Path) -> anyhow::Result<()> {
    let store = load_store(data_path)?;
    let filter = args.filter.to_filter();
    let pool = filter.apply(store.events());

    if pool.is_empty() {
        if mode.is_json() {
            println!("[]");
        } else {
            println!("No events found for this selection — nothing to quiz on.");
        }
        return Ok(());
    }

    let params = QuizParams {
        count: clamp_count(args.count, pool.len()),
        year_guess_probability: args.year_guess_bias,
    };
    let questions = match args.seed {
        Some(seed) => generate(&pool, &params, &mut SeededRng::new(seed)),
        None => generate(&pool, &params, &mut ThreadRandom),
    };
    tracing::debug!(questions = questions.len(), pool = pool.len(), "quiz generated");

    if mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let score = play(&questions, &mut stdin.lock(), &mut stdout.lock())?;
    println!("Score: {score}/{}", questions.len());
    Ok(())
}

/// Ask every question, collect answers, and return the final score.
///
/// Separated from terminal I/O so tests can drive it with buffers. Blank or
/// unparseable answers count as unanswered (wrong), matching the explorer's
/// unanswered radio buttons.
fn play(
    questions: &[Question],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut score = 0;
    for (idx, question) in questions.iter().enumerate() {
        writeln!(out, "\n{}. {}", idx + 1, sanitize_line(&question.text))?;
        for (opt_idx, choice) in question.options.iter().enumerate() {
            writeln!(out, "   {}) {}", opt_idx + 1, sanitize_line(&choice.label))?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed mid-quiz: remaining questions count as unanswered.
            continue;
        }
        let picked = line.trim().parse::<usize>().ok();
        let correct = picked
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| question.options.get(n))
            .is_some_and(|choice| choice.correct);
        if correct {
            score += 1;
        }
    }
    writeln!(out)?;
    Ok(score)
}
