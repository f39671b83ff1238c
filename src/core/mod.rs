//! Core domain types for the game
//!
//! Pure, synchronous types with no I/O: the target word, the player's guess,
//! and the per-letter feedback that compares the two.

mod feedback;
mod guess;
mod word;

pub use feedback::{
    ABSENT_SUFFIX, CORRECT_SUFFIX, Feedback, LetterFeedback, MISPLACED_SUFFIX, any_true,
};
pub use guess::{Guess, GuessError};
pub use word::{WORD_LENGTH, Word, WordError};
