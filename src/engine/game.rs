//! The game engine state machine
//!
//! Owns the board, the cursor, the target word, the eliminated-letter
//! set, the optional countdown, and two one-shot UI signals. All
//! commands are infallible: a command whose precondition does not hold
//! is a silent no-op, and nothing mutates the board once the game has
//! reached a terminal state.
//!
//! The engine expects a single serialized caller. Key commands and the
//! once-per-second [`GameEngine::tick`] must come from one control flow
//! (the TUI event loop here); the engine itself takes `&mut self` and
//! holds no locks.

use crate::core::{Board, Dictionary, evaluate, normalize};
use crate::engine::{Countdown, GameSettings};
use rustc_hash::FxHashSet;

/// Target used when the dictionary has no word of the required length.
/// Keeps a game playable against an empty or too-small word source.
const FALLBACK_TARGET: &str = "APPLE";

/// Outcome of a game.
///
/// Transitions are one-directional: `InProgress` to `Won` or `Lost`,
/// both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Won,
    Lost,
}

/// The word-guessing game engine.
///
/// Constructed from a [`GameSettings`] value and a [`Dictionary`]
/// reference; the presentation layer drives it with
/// [`add_letter`](Self::add_letter), [`remove_letter`](Self::remove_letter),
/// [`submit_guess`](Self::submit_guess) and [`tick`](Self::tick), and
/// re-renders from the read accessors afterwards. The
/// [`revision`](Self::revision) counter moves on every observable
/// mutation, so a renderer can redraw only when something changed.
#[derive(Debug)]
pub struct GameEngine<'a> {
    settings: GameSettings,
    dictionary: &'a Dictionary,
    board: Board,
    current_row: usize,
    current_col: usize,
    target: Vec<char>,
    target_folded: String,
    result: GameResult,
    eliminated: FxHashSet<char>,
    invalid_word: bool,
    time_expired: bool,
    countdown: Option<Countdown>,
    revision: u64,
}

impl<'a> GameEngine<'a> {
    /// Start a game with a random target of the configured length.
    ///
    /// Falls back to a fixed literal when the dictionary has no word of
    /// that length, so construction never fails.
    #[must_use]
    pub fn new(settings: GameSettings, dictionary: &'a Dictionary) -> Self {
        use rand::prelude::IndexedRandom;

        let candidates = dictionary.words_of_length(settings.word_length);
        let target = candidates
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(FALLBACK_TARGET);
        Self::with_target(settings, dictionary, target)
    }

    /// Start a game against a fixed target word.
    ///
    /// The target is uppercased with the Turkish rule. Useful for
    /// daily-word play and for tests.
    #[must_use]
    pub fn with_target(settings: GameSettings, dictionary: &'a Dictionary, target: &str) -> Self {
        let target: Vec<char> = target.chars().map(normalize::upper_char).collect();
        let target_folded = normalize::fold(&target.iter().collect::<String>());
        let countdown = settings
            .has_time_limit
            .then(|| Countdown::new(settings.time_limit_minutes * 60));

        Self {
            settings,
            dictionary,
            board: Board::new(settings.guess_limit, settings.word_length),
            current_row: 0,
            current_col: 0,
            target,
            target_folded,
            result: GameResult::InProgress,
            eliminated: FxHashSet::default(),
            invalid_word: false,
            time_expired: false,
            countdown,
            revision: 0,
        }
    }

    /// Enter a letter at the cursor.
    ///
    /// No-op when the game is over or the row is full. The letter is
    /// stored in its uppercase display form.
    pub fn add_letter(&mut self, ch: char) {
        if self.game_over() || self.current_col >= self.settings.word_length {
            return;
        }
        self.board
            .set_character(self.current_row, self.current_col, normalize::upper_char(ch));
        self.current_col += 1;
        self.revision += 1;
    }

    /// Delete the letter before the cursor.
    ///
    /// No-op when the game is over or the cursor is at column zero.
    pub fn remove_letter(&mut self) {
        if self.game_over() || self.current_col == 0 {
            return;
        }
        self.current_col -= 1;
        self.board.clear_character(self.current_row, self.current_col);
        self.revision += 1;
    }

    /// Submit the current row as a guess.
    ///
    /// No-op unless the row is completely filled. An unlisted word sets
    /// the [`invalid_word_submitted`](Self::invalid_word_submitted)
    /// signal and leaves the row editable; a listed word is scored,
    /// eliminations are recorded, and the game either ends or moves to
    /// the next row.
    pub fn submit_guess(&mut self) {
        if self.game_over() || self.current_col != self.settings.word_length {
            return;
        }

        let guess_chars = self.board.row_chars(self.current_row);
        let guess_text = self.board.row_text(self.current_row);

        if !self.dictionary.contains(&guess_text) {
            self.invalid_word = true;
            self.revision += 1;
            return;
        }

        let results = evaluate::evaluate(&guess_chars, &self.target);
        for (col, &result) in results.iter().enumerate() {
            self.board.set_result(self.current_row, col, result);
        }

        if self.settings.eliminate_wrong_letters {
            self.eliminated
                .extend(evaluate::eliminable_letters(&guess_chars, &results));
        }

        if normalize::fold(&guess_text) == self.target_folded {
            self.finish(GameResult::Won);
        } else {
            self.current_row += 1;
            self.current_col = 0;
            if self.current_row == self.settings.guess_limit {
                self.finish(GameResult::Lost);
            }
        }
        self.revision += 1;
    }

    /// Advance the countdown by one second.
    ///
    /// No-op without a time limit or after a terminal state. Reaching
    /// zero forces `Lost` and raises the
    /// [`time_expired`](Self::time_expired) signal.
    pub fn tick(&mut self) {
        if self.game_over() {
            return;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        if countdown.is_stopped() {
            return;
        }
        let expired = countdown.tick();
        self.revision += 1;
        if expired {
            self.result = GameResult::Lost;
            self.time_expired = true;
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.result = result;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.stop();
        }
    }

    /// The settings this game was started with.
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The board grid.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Row of the next writable cell.
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Column of the next writable cell (`word_length` when the row is full).
    #[inline]
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    /// The game outcome so far.
    #[inline]
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// True once a terminal state has been reached.
    #[inline]
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.result != GameResult::InProgress
    }

    /// The target word in its uppercase display form.
    #[must_use]
    pub fn target_word(&self) -> String {
        self.target.iter().collect()
    }

    /// Seconds left on the clock; `None` without a time limit.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::remaining)
    }

    /// Letters ruled out so far (uppercase display form).
    #[inline]
    #[must_use]
    pub const fn eliminated_letters(&self) -> &FxHashSet<char> {
        &self.eliminated
    }

    /// True if `ch` has been ruled out.
    #[must_use]
    pub fn is_eliminated(&self, ch: char) -> bool {
        self.eliminated.contains(&ch)
    }

    /// One-shot signal: the last submission was not a listed word.
    #[inline]
    #[must_use]
    pub const fn invalid_word_submitted(&self) -> bool {
        self.invalid_word
    }

    /// Clear the invalid-word signal after displaying it.
    pub fn acknowledge_invalid_word(&mut self) {
        self.invalid_word = false;
    }

    /// One-shot signal: the game was lost to the clock.
    #[inline]
    #[must_use]
    pub const fn time_expired(&self) -> bool {
        self.time_expired
    }

    /// Clear the time-expired signal after displaying it.
    pub fn acknowledge_time_expired(&mut self) {
        self.time_expired = false;
    }

    /// Monotonic counter of observable mutations.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult;

    fn dict() -> Dictionary {
        Dictionary::from_slice(&["kalem", "bursa", "terim", "masal", "tavuk", "horoz", "masa"])
    }

    fn settings() -> GameSettings {
        GameSettings::default()
    }

    fn timed_settings() -> GameSettings {
        GameSettings {
            has_time_limit: true,
            time_limit_minutes: 1,
            ..GameSettings::default()
        }
    }

    fn type_word(game: &mut GameEngine, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    #[test]
    fn new_game_starts_empty_and_in_progress() {
        let dictionary = dict();
        let game = GameEngine::with_target(settings(), &dictionary, "kalem");

        assert_eq!(game.result(), GameResult::InProgress);
        assert!(!game.game_over());
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.target_word(), "KALEM");
        assert_eq!(game.remaining_seconds(), None);
        assert!(game.board().cell(0, 0).is_empty());
    }

    #[test]
    fn add_letter_uppercases_and_advances() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "terim");

        game.add_letter('t');
        game.add_letter('i');
        assert_eq!(game.board().cell(0, 0).character(), Some('T'));
        assert_eq!(game.board().cell(0, 1).character(), Some('İ'));
        assert_eq!(game.current_col(), 2);
    }

    #[test]
    fn add_letter_stops_at_row_end() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "kalems");
        assert_eq!(game.current_col(), 5);
        assert_eq!(game.board().row_text(0), "KALEM");
    }

    #[test]
    fn remove_letter_clears_and_retreats() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "ka");
        game.remove_letter();
        assert_eq!(game.current_col(), 1);
        assert!(game.board().cell(0, 1).is_empty());
        assert_eq!(game.board().cell(0, 0).character(), Some('K'));
    }

    #[test]
    fn remove_letter_at_column_zero_is_noop() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        let revision = game.revision();
        game.remove_letter();
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.revision(), revision);
    }

    #[test]
    fn submit_incomplete_row_is_noop() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "kale");
        let revision = game.revision();
        game.submit_guess();
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 4);
        assert_eq!(game.revision(), revision);
    }

    #[test]
    fn unlisted_word_sets_signal_and_keeps_row_editable() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "xyzqw");
        game.submit_guess();

        assert!(game.invalid_word_submitted());
        assert!(!game.game_over());
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 5);
        // no cell was scored
        for col in 0..5 {
            assert_eq!(game.board().cell(0, col).result(), None);
        }

        // the row can still be edited after acknowledging
        game.acknowledge_invalid_word();
        assert!(!game.invalid_word_submitted());
        game.remove_letter();
        assert_eq!(game.current_col(), 4);
    }

    #[test]
    fn valid_guess_scores_row_and_advances() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "bursa");
        game.submit_guess();

        assert!(!game.invalid_word_submitted());
        assert_eq!(game.current_row(), 1);
        assert_eq!(game.current_col(), 0);
        assert_eq!(game.board().cell(0, 0).result(), Some(LetterResult::Wrong));
        assert_eq!(game.board().cell(0, 4).result(), Some(LetterResult::Misplaced));
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "kalem");
        game.submit_guess();

        assert_eq!(game.result(), GameResult::Won);
        assert!(game.game_over());
        assert!(game.board().row(0).iter().all(|cell| cell.result() == Some(LetterResult::Correct)));
        // the winning row is not consumed
        assert_eq!(game.current_row(), 0);
    }

    #[test]
    fn win_is_case_and_accent_insensitive() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "terim");

        // a dotless ASCII capital I must match the dotted İ of the target
        type_word(&mut game, "terIm");
        game.submit_guess();
        assert_eq!(game.board().row_text(0), "TERIM");
        assert_eq!(game.result(), GameResult::Won);
    }

    #[test]
    fn exhausting_guesses_loses_and_stops_countdown() {
        let dictionary = dict();
        let guesses = ["bursa", "masal", "tavuk", "horoz", "terim"];
        let mut game = GameEngine::with_target(timed_settings(), &dictionary, "kalem");

        for guess in guesses {
            type_word(&mut game, guess);
            game.submit_guess();
        }
        assert_eq!(game.result(), GameResult::Lost);
        assert!(!game.time_expired());

        // losing on guesses froze the clock
        let remaining = game.remaining_seconds();
        game.tick();
        assert_eq!(game.remaining_seconds(), remaining);
    }

    #[test]
    fn commands_are_noops_after_game_over() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "kalem");
        game.submit_guess();
        assert!(game.game_over());

        let revision = game.revision();
        game.add_letter('a');
        game.remove_letter();
        game.submit_guess();
        game.tick();
        assert_eq!(game.revision(), revision);
        assert_eq!(game.board().row_text(0), "KALEM");
    }

    #[test]
    fn elimination_respects_letters_with_hits() {
        let dictionary = dict();
        let eliminate = GameSettings {
            eliminate_wrong_letters: true,
            ..settings()
        };
        let mut game = GameEngine::with_target(eliminate, &dictionary, "kalem");

        // MASAL vs KALEM: second A scores Wrong, but the first A scores
        // Correct, so A must survive; only S is fully wrong.
        type_word(&mut game, "masal");
        game.submit_guess();
        assert!(game.is_eliminated('S'));
        assert!(!game.is_eliminated('A'));
        assert!(!game.is_eliminated('M'));
        assert!(!game.is_eliminated('L'));

        type_word(&mut game, "bursa");
        game.submit_guess();
        for ch in ['B', 'U', 'R', 'S'] {
            assert!(game.is_eliminated(ch));
        }
        assert!(!game.is_eliminated('A'));
        assert_eq!(game.eliminated_letters().len(), 4);
    }

    #[test]
    fn elimination_disabled_by_default() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        type_word(&mut game, "bursa");
        game.submit_guess();
        assert!(game.eliminated_letters().is_empty());
    }

    #[test]
    fn countdown_starts_with_time_limit() {
        let dictionary = dict();
        let game = GameEngine::with_target(timed_settings(), &dictionary, "kalem");
        assert_eq!(game.remaining_seconds(), Some(60));
    }

    #[test]
    fn tick_counts_down() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(timed_settings(), &dictionary, "kalem");

        game.tick();
        game.tick();
        assert_eq!(game.remaining_seconds(), Some(58));
        assert!(!game.game_over());
    }

    #[test]
    fn expiry_forces_lost_with_signal() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(timed_settings(), &dictionary, "kalem");

        for _ in 0..60 {
            game.tick();
        }
        assert_eq!(game.result(), GameResult::Lost);
        assert!(game.time_expired());
        assert_eq!(game.remaining_seconds(), Some(0));

        // a late tick must not mutate a finished game
        let revision = game.revision();
        game.tick();
        assert_eq!(game.revision(), revision);
        assert_eq!(game.result(), GameResult::Lost);
    }

    #[test]
    fn winning_stops_the_countdown() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(timed_settings(), &dictionary, "kalem");

        game.tick();
        type_word(&mut game, "kalem");
        game.submit_guess();
        assert_eq!(game.result(), GameResult::Won);

        let remaining = game.remaining_seconds();
        game.tick();
        assert_eq!(game.remaining_seconds(), remaining);
        assert!(!game.time_expired());
    }

    #[test]
    fn tick_without_time_limit_is_noop() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(settings(), &dictionary, "kalem");

        let revision = game.revision();
        game.tick();
        assert_eq!(game.remaining_seconds(), None);
        assert_eq!(game.revision(), revision);
    }

    #[test]
    fn empty_dictionary_falls_back_to_literal_target() {
        let dictionary = Dictionary::default();
        let game = GameEngine::new(settings(), &dictionary);
        assert_eq!(game.target_word(), "APPLE");
    }

    #[test]
    fn missing_length_falls_back_to_literal_target() {
        let dictionary = Dictionary::from_slice(&["kalem", "bursa"]);
        let four = GameSettings {
            word_length: 4,
            ..settings()
        };
        let game = GameEngine::new(four, &dictionary);
        assert_eq!(game.target_word(), "APPLE");
    }

    #[test]
    fn random_target_has_configured_length() {
        let dictionary = dict();
        let game = GameEngine::new(settings(), &dictionary);
        assert_eq!(game.target_word().chars().count(), 5);
        assert!(dictionary.contains(&game.target_word()));
    }

    #[test]
    fn revision_moves_on_mutations() {
        let dictionary = dict();
        let mut game = GameEngine::with_target(timed_settings(), &dictionary, "kalem");

        let mut last = game.revision();
        game.add_letter('k');
        assert!(game.revision() > last);

        last = game.revision();
        game.tick();
        assert!(game.revision() > last);

        last = game.revision();
        game.remove_letter();
        assert!(game.revision() > last);
    }
}
