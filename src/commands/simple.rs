//! Simple interactive CLI mode
//!
//! Line-based game without the TUI, for terminals where raw mode is
//! unavailable. The countdown is disabled here: line-buffered input
//! cannot drive a once-per-second tick.

use crate::core::Dictionary;
use crate::engine::{GameEngine, GameResult, GameSettings};
use crate::output::formatters::{colored_row, row_emoji};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-based CLI game.
///
/// # Errors
///
/// Returns an error on I/O failure while reading input or writing
/// output.
pub fn run_simple(
    mut settings: GameSettings,
    dictionary: &Dictionary,
    target: Option<&str>,
) -> Result<()> {
    if settings.has_time_limit {
        println!(
            "{}",
            "Süre sınırı sadece TUI modunda çalışır; kapatıldı.".yellow()
        );
        settings.has_time_limit = false;
    }

    let mut game = match target {
        Some(word) => GameEngine::with_target(settings, dictionary, word),
        None => GameEngine::new(settings, dictionary),
    };

    println!(
        "\nKELİME — {} harfli kelimeyi {} denemede bul.",
        settings.word_length, settings.guess_limit
    );
    println!("Çıkmak için 'çık' yaz.\n");

    while !game.game_over() {
        print_board(&game);

        let input = prompt("Tahmin")?;
        let input = input.trim();

        if matches!(input, "çık" | "q" | "quit") {
            println!("\nGörüşürüz!");
            return Ok(());
        }

        if input.chars().count() != settings.word_length {
            println!(
                "{}\n",
                format!("Kelime {} harfli olmalı.", settings.word_length).red()
            );
            continue;
        }

        for ch in input.chars() {
            game.add_letter(ch);
        }
        game.submit_guess();

        if game.invalid_word_submitted() {
            println!("{}\n", "Geçersiz kelime: listede yok.".red());
            game.acknowledge_invalid_word();
            // the row stays editable; clear it for the next line of input
            while game.current_col() > 0 {
                game.remove_letter();
            }
            continue;
        }

        if settings.eliminate_wrong_letters && !game.eliminated_letters().is_empty() {
            let mut letters: Vec<char> = game.eliminated_letters().iter().copied().collect();
            letters.sort_unstable();
            let joined = letters
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("Elenen harfler: {}\n", joined.dimmed());
        }
    }

    print_board(&game);

    match game.result() {
        GameResult::Won => {
            let attempts = game.current_row() + 1;
            println!(
                "\n{}",
                format!("Tebrikler! {attempts}. denemede bildin.")
                    .green()
                    .bold()
            );
        }
        GameResult::Lost => {
            println!(
                "\n{}",
                format!("Oyun bitti. Hedef: {}", game.target_word()).yellow()
            );
        }
        GameResult::InProgress => unreachable!("loop exits only on game over"),
    }

    // share-style summary of the scored rows
    let scored_rows = match game.result() {
        GameResult::Won => game.current_row() + 1,
        _ => settings.guess_limit,
    };
    println!();
    for row in 0..scored_rows {
        println!("{}", row_emoji(game.board().row(row)));
    }
    println!();

    Ok(())
}

fn print_board(game: &GameEngine) {
    println!();
    for row in 0..game.board().rows() {
        println!("  {}", colored_row(game.board().row(row)));
    }
    println!();
}

/// Get user input with a prompt
fn prompt(text: &str) -> Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input)
}
