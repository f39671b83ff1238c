//! Interactive console game
//!
//! Reads guesses line by line and writes feedback, so the same loop drives
//! stdin/stdout in the binary and in-memory buffers in tests.

use crate::game::{GUESS_BUDGET, GameSession, GameStatus};
use crate::output::{
    print_game_over, print_guess_result, print_new_game, print_statistics, print_welcome,
};
use crate::wordlists::WordSource;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Win/loss record across the games of one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Indexed by the number of guesses a win took
    pub guess_distribution: [usize; GUESS_BUDGET as usize + 1],
}

impl Statistics {
    /// Record a finished game: `Some(turns)` for a win, `None` for a loss
    pub fn record(&mut self, won_in: Option<u8>) {
        self.total_games += 1;
        if let Some(turns) = won_in {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(usize::from(turns)) {
                *slot += 1;
            }
        }
    }
}

enum Command<'a> {
    Quit,
    NewGame,
    Guess(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.to_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "new" => Command::NewGame,
        _ => Command::Guess(line),
    }
}

/// Run the interactive game until the player quits or input ends
///
/// Finished games are recorded in the returned statistics; games abandoned
/// with `new` or `quit` are not.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, I, O>(
    source: &mut WordSource<R>,
    mut input: I,
    mut output: O,
) -> io::Result<Statistics>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut stats = Statistics::default();
    print_welcome(&mut output, source.len())?;

    'games: loop {
        let mut session = GameSession::from_word(source.pick_word());
        print_new_game(&mut output)?;

        while !session.is_over() {
            write!(output, "Guess {}/{GUESS_BUDGET}: ", session.guesses_used() + 1)?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                print_statistics(&mut output, &stats)?;
                return Ok(stats);
            };

            match parse_command(&line) {
                Command::Quit => {
                    let word = session.target().text().to_uppercase();
                    writeln!(output, "The word was {word}.")?;
                    print_statistics(&mut output, &stats)?;
                    return Ok(stats);
                }
                Command::NewGame => {
                    debug!("game abandoned, target was {}", session.target());
                    continue 'games;
                }
                Command::Guess(text) => match session.submit_guess(text) {
                    Ok(result) => print_guess_result(&mut output, &result)?,
                    Err(e) => writeln!(output, "{}", e.to_string().red())?,
                },
            }
        }

        let won = session.status() == GameStatus::Won;
        stats.record(won.then_some(session.guesses_used()));
        print_game_over(&mut output, &session)?;

        write!(output, "\nPlay again? [y/N]: ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "y" | "yes") => {}
            _ => {
                print_statistics(&mut output, &stats)?;
                return Ok(stats);
            }
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
