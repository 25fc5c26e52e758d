//! Game configuration

/// Settings for one game, fixed once the game starts.
///
/// The UI layer is expected to constrain the values it offers
/// (word lengths 4-6, a handful of guess rows, a few minutes on the
/// clock); the engine takes the settings as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Letters per guess (columns on the board).
    pub word_length: usize,
    /// Allowed guesses (rows on the board).
    pub guess_limit: usize,
    /// Whether the countdown runs.
    pub has_time_limit: bool,
    /// Countdown length in minutes; only meaningful with `has_time_limit`.
    pub time_limit_minutes: u32,
    /// Whether fully-wrong letters are tracked for keyboard dimming.
    pub eliminate_wrong_letters: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            word_length: 5,
            guess_limit: 5,
            has_time_limit: false,
            time_limit_minutes: 3,
            eliminate_wrong_letters: false,
        }
    }
}
