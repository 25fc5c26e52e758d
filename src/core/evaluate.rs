//! Guess evaluation
//!
//! Implements the two-pass scoring rule with correct duplicate-letter
//! handling: exact matches are marked first and consume their target
//! occurrence, then the remaining positions are matched left-to-right
//! against the leftover pool. Letters are compared in folded form, so
//! evaluation agrees with the case/accent-insensitive win condition.

use super::LetterResult;
use super::normalize;
use rustc_hash::{FxHashMap, FxHashSet};

/// Score a guess against a target, one result per guess position.
///
/// Both passes consume target occurrences from a per-letter pool, so a
/// guess never receives more `Correct`/`Misplaced` marks for a letter
/// than the target contains occurrences of it.
///
/// # Examples
/// ```
/// use kelime::core::LetterResult::{Misplaced, Wrong};
/// use kelime::core::evaluate::evaluate;
///
/// let guess: Vec<char> = "ALLOY".chars().collect();
/// let target: Vec<char> = "LLAMA".chars().collect();
/// assert_eq!(
///     evaluate(&guess, &target),
///     vec![Misplaced, Misplaced, Misplaced, Wrong, Wrong],
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], target: &[char]) -> Vec<LetterResult> {
    let guess: Vec<char> = guess.iter().map(|&c| normalize::fold_char(c)).collect();
    let target: Vec<char> = target.iter().map(|&c| normalize::fold_char(c)).collect();

    let mut results = vec![LetterResult::Wrong; guess.len()];
    let mut available: FxHashMap<char, u8> = FxHashMap::default();
    for &c in &target {
        *available.entry(c).or_insert(0) += 1;
    }

    // First pass: exact position matches consume their target occurrence
    for (i, &c) in guess.iter().enumerate() {
        if target.get(i) == Some(&c) {
            results[i] = LetterResult::Correct;
            if let Some(count) = available.get_mut(&c) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: remaining positions match leftover occurrences
    for (i, &c) in guess.iter().enumerate() {
        if results[i] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&c)
            && *count > 0
        {
            results[i] = LetterResult::Misplaced;
            *count -= 1;
        }
    }

    results
}

/// Letters of a scored row that may be eliminated from the keyboard.
///
/// A letter qualifies only if every occurrence of it in the row scored
/// [`LetterResult::Wrong`]; one `Correct` or `Misplaced` occurrence
/// anywhere in the row protects the letter. Letter identity follows the
/// folded form, the returned characters are the board's display form.
#[must_use]
pub fn eliminable_letters(guess: &[char], results: &[LetterResult]) -> Vec<char> {
    let mut hits: FxHashSet<char> = FxHashSet::default();
    for (&c, &r) in guess.iter().zip(results) {
        if r != LetterResult::Wrong {
            hits.insert(normalize::fold_char(c));
        }
    }

    guess
        .iter()
        .zip(results)
        .filter(|&(&c, &r)| r == LetterResult::Wrong && !hits.contains(&normalize::fold_char(c)))
        .map(|(&c, _)| c)
        .collect()
}
