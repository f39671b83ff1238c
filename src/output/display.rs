//! Display functions for game and command results

use super::formatters::{attempts_bar, create_progress_bar, feedback_tiles};
use crate::commands::{CheckResult, Statistics};
use crate::game::{GUESS_BUDGET, GameSession, GameStatus, GuessResult};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner shown when the game starts
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_welcome<W: Write>(out: &mut W, word_count: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(44).cyan())?;
    writeln!(out, " {} ", "WORD GUESSING GAME".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(44).cyan())?;
    writeln!(out, "{word_count} possible words.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")
}

/// Print the header of a new game
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_new_game<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nNew game! Guess the 5-letter word. You have {GUESS_BUDGET} guesses."
    )
}

/// Print the outcome of one submitted guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_guess_result<W: Write>(out: &mut W, result: &GuessResult) -> io::Result<()> {
    if let Some(feedback) = &result.feedback {
        writeln!(out, "{}  {}", feedback_tiles(feedback), feedback.to_emoji())?;
    }

    if result.solved {
        writeln!(out, "{}", result.message.green().bold())?;
    } else {
        for line in result.message.lines() {
            writeln!(out, "  {line}")?;
        }
        if result.feedback.is_some() {
            writeln!(
                out,
                "Guesses left: {} ({})",
                attempts_bar(result.remaining, GUESS_BUDGET),
                result.remaining
            )?;
        }
    }
    Ok(())
}

/// Print every guess of a session so far
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    for (i, feedback) in session.history().iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, feedback_tiles(feedback))?;
    }
    Ok(())
}

/// Print the end of a finished game
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_game_over<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let word = session.target().text().to_uppercase();
    match session.status() {
        GameStatus::Won => {
            writeln!(out, "\n{}", format!("✅ The word was {word}").green())?;
        }
        GameStatus::Lost => {
            writeln!(
                out,
                "\n{}",
                format!("❌ Out of guesses! The word was {word}").red().bold()
            )?;
        }
        GameStatus::InProgress => {}
    }
    print_board(out, session)
}

/// Print win/loss statistics for the games played
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(44).cyan())?;
    writeln!(out, " {} ", "STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(44).cyan())?;
    writeln!(out, "   Games played: {}", stats.total_games)?;
    writeln!(out, "   Games won:    {}", stats.games_won)?;

    if stats.games_won == 0 {
        return Ok(());
    }

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for (turns, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, stats.games_won, 20);
        writeln!(out, "   {turns}: {} {count}", bar.green())?;
    }
    Ok(())
}

/// Print the result of checking one guess against a known target
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_check_result<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        "Target:".bright_cyan().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "{}  {}  {}",
        feedback_tiles(&result.feedback),
        result.feedback.to_emoji(),
        result.guess
    )?;

    if result.solved {
        writeln!(out, "{}", result.message.green().bold())
    } else {
        writeln!(out, "{}", result.message)
    }
}
