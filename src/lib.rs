//! Kelime
//!
//! A Turkish Wordle-style word game: guess the hidden word within a
//! limited number of tries, with per-letter feedback and optional
//! countdown and letter-elimination rules. Dictionary lookups are
//! case- and accent-insensitive with proper Turkish İ/ı handling.
//!
//! # Quick Start
//!
//! ```rust
//! use kelime::core::Dictionary;
//! use kelime::engine::{GameEngine, GameResult, GameSettings};
//!
//! let dictionary = Dictionary::from_slice(&["kalem", "bursa", "terim"]);
//! let mut game = GameEngine::with_target(GameSettings::default(), &dictionary, "kalem");
//!
//! for ch in "bursa".chars() {
//!     game.add_letter(ch);
//! }
//! game.submit_guess();
//!
//! assert_eq!(game.result(), GameResult::InProgress);
//! assert_eq!(game.current_row(), 1);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
