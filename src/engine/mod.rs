//! The game engine
//!
//! State machine, settings, and the countdown. The engine is UI-free:
//! the `interactive` and `commands` modules drive it and render its
//! published state.

mod countdown;
mod game;
mod settings;

pub use countdown::Countdown;
pub use game::{GameEngine, GameResult};
pub use settings::GameSettings;
