//! Turkish-locale case mapping and diacritic folding
//!
//! Dictionary lookups and guess evaluation must not care about case or
//! accents. Plain Unicode lowercasing is not enough for Turkish: `İ`
//! lowercases to `i` + U+0307 (combining dot above), which breaks naive
//! string comparison, and `I` must become dotless `ı`, not `i`. The fold
//! here applies the Turkish case rule first, then strips combining marks
//! (`ç→c`, `ğ→g`, `ö→o`, `ş→s`, `ü→u`, `â→a`, ...) and maps the
//! undecomposable dotless `ı` to `i`.

use std::iter;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string to its canonical lookup form.
///
/// Lowercases with the Turkish rule, strips diacritical marks to their
/// base letters, and returns the canonically composed (NFC) result. The
/// fold is idempotent: `fold(fold(s)) == fold(s)`.
///
/// # Examples
/// ```
/// use kelime::core::normalize::fold;
///
/// assert_eq!(fold("TERİM"), "terim");
/// assert_eq!(fold("ILICA"), "ilica");
/// assert_eq!(fold("kâğıt"), "kagit");
/// ```
#[must_use]
pub fn fold(s: &str) -> String {
    // Compose first so a decomposed "I\u{0307}" is seen as 'İ'.
    s.nfc()
        .map(lower_char)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == 'ı' { 'i' } else { c })
        .nfc()
        .collect()
}

/// Fold a single character to its base lowercase letter.
///
/// Used by guess evaluation so that letter comparison agrees with the
/// word-level [`fold`].
///
/// # Examples
/// ```
/// use kelime::core::normalize::fold_char;
///
/// assert_eq!(fold_char('İ'), 'i');
/// assert_eq!(fold_char('I'), 'i');
/// assert_eq!(fold_char('Ş'), 's');
/// ```
#[must_use]
pub fn fold_char(c: char) -> char {
    let lowered = lower_char(c);
    let base = iter::once(lowered)
        .nfd()
        .find(|d| !is_combining_mark(*d))
        .unwrap_or(lowered);
    if base == 'ı' { 'i' } else { base }
}

/// Lowercase one character with the Turkish rule: `İ → i`, `I → ı`.
#[inline]
#[must_use]
pub fn lower_char(c: char) -> char {
    match c {
        'İ' => 'i',
        'I' => 'ı',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercase one character with the Turkish rule: `i → İ`, `ı → I`.
///
/// This is the form written into board cells.
#[inline]
#[must_use]
pub fn upper_char(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Uppercase a string with the Turkish rule, keeping diacritics.
///
/// # Examples
/// ```
/// use kelime::core::normalize::upper;
///
/// assert_eq!(upper("terim"), "TERİM");
/// assert_eq!(upper("çiçek"), "ÇİÇEK");
/// ```
#[must_use]
pub fn upper(s: &str) -> String {
    s.chars().map(upper_char).collect()
}
