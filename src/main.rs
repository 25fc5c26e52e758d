//! Kelime - CLI
//!
//! Turkish Wordle-style word game with TUI and plain CLI modes.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use kelime::{
    commands::run_simple,
    core::Dictionary,
    engine::GameSettings,
    interactive::{App, run_tui},
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "kelime",
    about = "Turkish Wordle-style word game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per guess
    #[arg(short = 'l', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(4..=6))]
    word_length: u8,

    /// Allowed guesses (rows on the board)
    #[arg(short = 'g', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    guess_limit: u8,

    /// Time limit in minutes; enables the countdown
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..=30))]
    time_limit: Option<u32>,

    /// Dim letters ruled out by earlier guesses
    #[arg(short = 'e', long)]
    eliminate: bool,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, default_value = "embedded")]
    wordlist: String,

    /// Fixed target word instead of a random pick (daily-word play, testing)
    #[arg(long)]
    target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-based CLI mode (no raw terminal needed)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let dictionary = Dictionary::new(words);
    ensure!(
        !dictionary.is_empty(),
        "word list '{}' is empty; cannot start a game",
        cli.wordlist
    );

    let settings = GameSettings {
        word_length: usize::from(cli.word_length),
        guess_limit: usize::from(cli.guess_limit),
        has_time_limit: cli.time_limit.is_some(),
        time_limit_minutes: cli.time_limit.unwrap_or(3),
        eliminate_wrong_letters: cli.eliminate,
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(settings, &dictionary, cli.target.as_deref());
            run_tui(app)
        }
        Commands::Simple => run_simple(settings, &dictionary, cli.target.as_deref()),
    }
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(loader::words_from_slice(WORDS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'")),
    }
}
