//! Target word representation
//!
//! A Word stores a validated 5-letter target along with its letter counts,
//! which cap how many times a guessed letter can be credited.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every target word and every guess.
pub const WORD_LENGTH: usize = 5;

/// A 5-letter lower-case target word
///
/// Letter counts are computed once on construction and handed out as copies,
/// so a caller can consume them without touching the word itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letter_counts: FxHashMap<char, u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("About").unwrap();
    /// assert_eq!(word.text(), "about");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("ab0ut").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let Ok(chars) = <[u8; WORD_LENGTH]>::try_from(text.as_bytes()) else {
            return Err(WordError::InvalidLength(text.len()));
        };

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts: FxHashMap<char, u8> = FxHashMap::default();
        for &ch in &chars {
            *letter_counts.entry(char::from(ch)).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            chars,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position] as char
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u8 {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }

    /// The letter occurrence counts of this word.
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &FxHashMap<char, u8> {
        &self.letter_counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
