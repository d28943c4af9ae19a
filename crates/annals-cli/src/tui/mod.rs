//! Terminal user interface (TUI) for annals.
//!
//! Provides the interactive full-screen explorer with list, timeline, and
//! quiz tabs over the filtered event selection.
//!
//! ## Entry points
//!
//! - [`explorer::run`] — interactive explorer with filtering, quiz, and export.

pub mod explorer;
