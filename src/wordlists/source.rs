//! Random target word selection
//!
//! A `WordSource` owns its candidate list and its random generator. The
//! generator is seeded once, when the source is built, and injected so tests
//! can use a fixed seed.

use crate::core::Word;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for word sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSourceError {
    /// No candidate words were supplied
    EmptyWordSource,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordSource => write!(f, "Word source has no candidate words"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Draws target words uniformly at random from a non-empty list
pub struct WordSource<R = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl<R: Rng> WordSource<R> {
    /// Create a source over `words` using the given generator
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyWordSource` if `words` is empty.
    pub fn new(words: Vec<Word>, rng: R) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::EmptyWordSource);
        }
        Ok(Self { words, rng })
    }

    /// Draw one word at random
    ///
    /// Successive draws are independent; the same word may come up twice in a row.
    pub fn pick_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        let word = self.words[index].clone();
        debug!("picked target word #{index}: {word}");
        word
    }

    /// Number of candidate words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a source cannot be built without words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The candidate words
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordSource<StdRng> {
    /// Create a source with a deterministic generator
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyWordSource` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{WordSource, loader::words_from_slice};
    ///
    /// let words = words_from_slice(&["about", "speed", "crane"]);
    /// let mut a = WordSource::with_seed(words.clone(), 7).unwrap();
    /// let mut b = WordSource::with_seed(words, 7).unwrap();
    /// assert_eq!(a.pick_word(), b.pick_word());
    /// ```
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Result<Self, WordSourceError> {
        Self::new(words, StdRng::seed_from_u64(seed))
    }

    /// Create a source seeded from the operating system
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyWordSource` if `words` is empty.
    pub fn from_os_rng(words: Vec<Word>) -> Result<Self, WordSourceError> {
        Self::new(words, StdRng::from_os_rng())
    }
}
