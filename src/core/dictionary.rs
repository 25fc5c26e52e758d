//! The word source: raw list plus a folded lookup set
//!
//! Built once at startup and immutable afterwards. Membership queries go
//! through [`normalize::fold`], so a guess that differs from a listed
//! word only by case or accent is still accepted.

use super::normalize;
use rustc_hash::FxHashSet;

/// A dictionary of playable words.
///
/// Holds the raw (lowercase) word list and a derived set of folded
/// forms for validation. An unavailable or unparsable source simply
/// yields an empty dictionary; starting a game against one is the
/// caller's responsibility to prevent.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    folded: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an owned word list.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let folded = words.iter().map(|w| normalize::fold(w)).collect();
        Self { words, folded }
    }

    /// Build a dictionary from string slices.
    ///
    /// # Examples
    /// ```
    /// use kelime::core::Dictionary;
    ///
    /// let dict = Dictionary::from_slice(&["kalem", "terim"]);
    /// assert!(dict.contains("TERİM"));
    /// assert!(!dict.contains("bursa"));
    /// ```
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self::new(words.iter().map(ToString::to_string).collect())
    }

    /// True iff the folded form of `candidate` matches a listed word.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.folded.contains(&normalize::fold(candidate))
    }

    /// The listed words whose letter count equals `length`.
    ///
    /// Used to pick a target word for a game.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| w.chars().count() == length)
            .collect()
    }

    /// Number of listed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
