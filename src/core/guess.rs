//! Player guess representation
//!
//! Any 5-character input is a legal guess; there is no dictionary check.

use super::word::WORD_LENGTH;
use std::fmt;

/// Error type for invalid guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// A 5-character player guess
///
/// Keeps the text exactly as typed for feedback messages, plus the
/// case-folded letters used for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    typed: [char; WORD_LENGTH],
    folded: [char; WORD_LENGTH],
}

impl Guess {
    /// Create a guess from raw player input
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidLength` if the input is not exactly 5 characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Guess;
    ///
    /// let guess = Guess::new("ABCDE").unwrap();
    /// assert_eq!(guess.letter_at(0), 'a');
    /// assert_eq!(guess.typed_at(0), 'A');
    ///
    /// assert!(Guess::new("XYZ").is_err());
    /// ```
    pub fn new(input: &str) -> Result<Self, GuessError> {
        let chars: Vec<char> = input.chars().collect();
        let typed: [char; WORD_LENGTH] = chars
            .as_slice()
            .try_into()
            .map_err(|_| GuessError::InvalidLength(chars.len()))?;

        Ok(Self {
            text: input.to_string(),
            typed,
            folded: typed.map(|c| c.to_ascii_lowercase()),
        })
    }

    /// The guess as typed
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded letter at a position (0-4), used for comparison
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.folded[position]
    }

    /// Letter at a position (0-4) exactly as the player typed it
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn typed_at(&self, position: usize) -> char {
        self.typed[position]
    }

    /// Case-folded letters of the guess
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.folded
    }

    /// Whether the guess spells the given word, ignoring case
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.folded.iter().copied().eq(text.chars())
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_keeps_typed_case() {
        let guess = Guess::new("CrAnE").unwrap();
        assert_eq!(guess.text(), "CrAnE");
        assert_eq!(guess.typed_at(0), 'C');
        assert_eq!(guess.typed_at(1), 'r');
        assert_eq!(guess.letters(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn guess_accepts_any_five_characters() {
        assert!(Guess::new("XXXXX").is_ok());
        assert!(Guess::new("12345").is_ok());
        assert!(Guess::new("a b c").is_ok());
    }

    #[test]
    fn guess_length_counts_characters() {
        // Five characters, more than five bytes
        assert!(Guess::new("ééééé").is_ok());
        assert_eq!(Guess::new("éé"), Err(GuessError::InvalidLength(2)));
    }

    #[test]
    fn guess_invalid_length() {
        assert_eq!(Guess::new("XYZ"), Err(GuessError::InvalidLength(3)));
        assert_eq!(Guess::new("abcdef"), Err(GuessError::InvalidLength(6)));
        assert_eq!(Guess::new(""), Err(GuessError::InvalidLength(0)));
    }

    #[test]
    fn guess_error_display() {
        assert_eq!(
            GuessError::InvalidLength(3).to_string(),
            "Guess must be exactly 5 characters, got 3"
        );
    }

    #[test]
    fn guess_matches_ignores_case() {
        let guess = Guess::new("ABOUT").unwrap();
        assert!(guess.matches("about"));
        assert!(!guess.matches("above"));
    }
}
