//! annals-core: event model, filtering, quiz generation, and export
//! formatting for the annals history explorer.
//!
//! # Conventions
//!
//! - **Errors**: loading returns the typed [`Error`]; everything downstream
//!   of a loaded store is a pure, total function.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod error;
pub mod event;
pub mod export;
pub mod filter;
pub mod quiz;
pub mod rng;

pub use error::Error;
pub use event::{Event, EventStore, MONTHS, month_name};
pub use export::{ExportFormat, export_filename};
pub use filter::{EventFilter, canonical_cmp};
pub use quiz::{Choice, MAX_QUESTIONS, Question, QuizParams, clamp_count, generate};
pub use rng::{RandomSource, SeededRng, ThreadRandom, shuffle};
