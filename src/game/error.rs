//! Errors raised by a game session.

use crate::core::{GuessError, WORD_LENGTH, WordError};
use std::fmt;

/// Errors that can occur when starting a game or submitting a guess.
///
/// A guess that simply does not match the target is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The target word handed to the session is not 5 ASCII letters
    InvalidTargetWord(WordError),
    /// The guess is not exactly 5 characters long
    InvalidGuessLength(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTargetWord(e) => write!(f, "Invalid target word: {e}"),
            Self::InvalidGuessLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTargetWord(e) => Some(e),
            Self::InvalidGuessLength(_) => None,
        }
    }
}

impl From<GuessError> for GameError {
    fn from(e: GuessError) -> Self {
        match e {
            GuessError::InvalidLength(len) => Self::InvalidGuessLength(len),
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidTargetWord(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_length_message_matches_guess_error() {
        let guess_error = GuessError::InvalidLength(3);
        assert_eq!(
            GameError::from(guess_error).to_string(),
            guess_error.to_string()
        );
    }

    #[test]
    fn invalid_target_has_source() {
        use std::error::Error;

        let e = GameError::from(WordError::InvalidLength(4));
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("Invalid target word: "));
    }
}
