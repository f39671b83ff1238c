//! Word lists for the game
//!
//! Provides the embedded candidate list, a plain-text loader, and the random
//! target picker.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordSource, WordSourceError};
