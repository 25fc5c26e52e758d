//! TUI application state and event loop

use crate::core::Dictionary;
use crate::engine::{GameEngine, GameSettings};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Turkish keyboard layout shown under the board.
pub const KEY_ROWS: [&[char]; 3] = [
    &['E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', 'Ğ', 'Ü'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Ş', 'İ'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M', 'Ö', 'Ç'],
];

/// Application state for the TUI game.
pub struct App<'a> {
    pub engine: GameEngine<'a>,
    dictionary: &'a Dictionary,
    settings: GameSettings,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Set up a game. A fixed `target` overrides random selection for
    /// the first game only; restarts pick randomly.
    #[must_use]
    pub fn new(settings: GameSettings, dictionary: &'a Dictionary, target: Option<&str>) -> Self {
        let engine = match target {
            Some(word) => GameEngine::with_target(settings, dictionary, word),
            None => GameEngine::new(settings, dictionary),
        };

        Self {
            engine,
            dictionary,
            settings,
            should_quit: false,
        }
    }

    /// Discard the current game and start a fresh one.
    pub fn new_game(&mut self) {
        self.engine = GameEngine::new(self.settings, self.dictionary);
    }

    /// Route one key event to the engine.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Any keypress dismisses a pending invalid-word alert.
        if self.engine.invalid_word_submitted() {
            self.engine.acknowledge_invalid_word();
        }

        if self.engine.game_over() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                _ => {
                    if self.engine.time_expired() {
                        self.engine.acknowledge_time_expired();
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.engine.submit_guess(),
            KeyCode::Backspace => self.engine.remove_letter(),
            KeyCode::Char(c) if c.is_alphabetic() => self.engine.add_letter(c),
            _ => {}
        }
    }
}

/// Run the TUI game.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_duration = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Input with timeout until the next countdown tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.engine.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
