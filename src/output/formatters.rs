//! Formatting utilities for terminal output

use crate::core::{LetterCell, LetterResult};
use colored::Colorize;

/// Format remaining seconds as `m:ss`.
///
/// # Examples
/// ```
/// use kelime::output::formatters::format_clock;
///
/// assert_eq!(format_clock(180), "3:00");
/// assert_eq!(format_clock(59), "0:59");
/// ```
#[must_use]
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render a scored board row with colored backgrounds.
///
/// Unfilled cells show as underscores, unscored letters keep the
/// default background.
#[must_use]
pub fn colored_row(cells: &[LetterCell]) -> String {
    let mut out = String::new();
    for cell in cells {
        let text = match cell.character() {
            Some(ch) => format!(" {ch} "),
            None => " _ ".to_string(),
        };
        let piece = match cell.result() {
            Some(LetterResult::Correct) => text.black().on_green().to_string(),
            Some(LetterResult::Misplaced) => text.black().on_yellow().to_string(),
            Some(LetterResult::Wrong) => text.white().on_black().to_string(),
            None => text,
        };
        out.push_str(&piece);
    }
    out
}

/// Render a scored board row as a share-style emoji string.
#[must_use]
pub fn row_emoji(cells: &[LetterCell]) -> String {
    cells
        .iter()
        .map(|cell| match cell.result() {
            Some(LetterResult::Correct) => '🟩',
            Some(LetterResult::Misplaced) => '🟨',
            _ => '⬜',
        })
        .collect()
}
