//! Word list loading utilities
//!
//! Word lists are plain text: one word per line, whitespace-trimmed,
//! case-insensitive, blank lines ignored, no header.

use crate::core::Word;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = load_from_reader(BufReader::new(File::open(path)?))?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if a line cannot be read.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(e) => warn!("skipping word list line {}: {trimmed:?} ({e})", index + 1),
        }
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s.trim()).ok()).collect()
}
