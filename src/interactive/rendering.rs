//! TUI rendering with ratatui
//!
//! Draws the board grid, the on-screen keyboard, the countdown clock,
//! and the alert/status line from the engine's published state.

use super::app::{App, KEY_ROWS};
use crate::core::{LetterCell, LetterResult};
use crate::engine::GameResult;
use crate::output::formatters::format_clock;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with clock
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Alerts / status
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let clock = match app.engine.remaining_seconds() {
        Some(seconds) if !app.engine.game_over() => format!("Süre: {}", format_clock(seconds)),
        _ => "Süre: -".to_string(),
    };

    let header = Paragraph::new(clock)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" KELİME ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.engine.board();

    let mut lines = Vec::with_capacity(board.rows());
    for row in 0..board.rows() {
        let mut spans = Vec::with_capacity(board.cols() * 2);
        for cell in board.row(row) {
            spans.push(cell_span(cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn cell_span(cell: &LetterCell) -> Span<'static> {
    let text = match cell.character() {
        Some(ch) => format!(" {ch} "),
        None => " · ".to_string(),
    };

    let style = match (cell.result(), cell.character()) {
        (Some(LetterResult::Correct), _) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (Some(LetterResult::Misplaced), _) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (Some(LetterResult::Wrong), _) => Style::default().fg(Color::White).bg(Color::DarkGray),
        (None, Some(_)) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        (None, None) => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&key| {
                    let style = if app.engine.is_eliminated(key) {
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;

    let (text, color) = if engine.invalid_word_submitted() {
        ("Geçersiz kelime: listede yok.".to_string(), Color::Red)
    } else if engine.time_expired() {
        (
            format!("Süre doldu! Hedef: {}", engine.target_word()),
            Color::Red,
        )
    } else {
        match engine.result() {
            GameResult::Won => (
                format!(
                    "Tebrikler! {}. denemede bildin. │ n: yeni oyun │ q: çık",
                    engine.current_row() + 1
                ),
                Color::Green,
            ),
            GameResult::Lost => (
                format!(
                    "Oyun bitti. Hedef: {} │ n: yeni oyun │ q: çık",
                    engine.target_word()
                ),
                Color::Yellow,
            ),
            GameResult::InProgress => (
                "Enter: dene │ Backspace: sil │ Esc: çık".to_string(),
                Color::DarkGray,
            ),
        }
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
