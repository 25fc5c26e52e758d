//! Word list loading utilities
//!
//! Loads newline-delimited word files and cleans them to the shape the
//! dictionary expects: lowercase, purely alphabetic tokens. Malformed
//! lines are skipped, never reported as errors.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load playable words from a newline-delimited file.
///
/// Lines are trimmed and lowercased with the Turkish rule; empty lines
/// and tokens containing anything but letters (spaces, hyphens, digits)
/// are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use kelime::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Convert an embedded string slice to an owned word list.
///
/// # Examples
/// ```
/// use kelime::wordlists::WORDS;
/// use kelime::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter(|w| is_playable(w))
        .map(|w| lowercase(w))
        .collect()
}

fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|w| is_playable(w))
        .map(lowercase)
        .collect()
}

fn is_playable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn lowercase(word: &str) -> String {
    word.chars().map(normalize::lower_char).collect()
}
