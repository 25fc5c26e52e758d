//! Terminal output formatting
//!
//! Display utilities shared by the simple CLI mode and end-of-game
//! summaries.

pub mod formatters;

pub use formatters::{colored_row, format_clock, row_emoji};
