//! Wordle Game - CLI
//!
//! Play the word guessing game in the terminal, or check a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_game::{
    commands::{check_guess, run_play},
    core::Word,
    logging::init_logging,
    output::print_check_result,
    wordlists::{WORDS, WordSource, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score one guess against a known target
    Check {
        /// The secret word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word list named by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed),
        Commands::Check { target, guess } => {
            let result = check_guess(&target, &guess)?;
            print_check_result(&mut io::stdout().lock(), &result)?;
            Ok(())
        }
    }
}

fn run_play_command(wordlist_mode: &str, seed: Option<u64>) -> Result<()> {
    let words = load_wordlist(wordlist_mode)?;
    let mut source = match seed {
        Some(seed) => WordSource::with_seed(words, seed)?,
        None => WordSource::from_os_rng(words)?,
    };

    let stdin = io::stdin();
    run_play(&mut source, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
