//! Single guess check
//!
//! Evaluates one guess against a known target, without starting a game.

use crate::core::{Feedback, Guess, Word};
use crate::game::GameError;

/// Result of checking a guess
pub struct CheckResult {
    pub target: String,
    pub guess: String,
    pub feedback: Feedback,
    pub message: String,
    pub solved: bool,
}

/// Check `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 ASCII letters)
/// - The guess is not exactly 5 characters
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, GameError> {
    let target = Word::new(target)?;
    let guess = Guess::new(guess)?;

    let feedback = Feedback::calculate(&guess, &target);
    let solved = guess.matches(target.text());

    Ok(CheckResult {
        target: target.text().to_string(),
        guess: guess.text().to_string(),
        message: feedback.message(),
        feedback,
        solved,
    })
}
