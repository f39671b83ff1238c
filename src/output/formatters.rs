//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback};
use colored::{ColoredString, Colorize};

/// Render one guess as coloured letter tiles
///
/// Green for correct, yellow for misplaced, gray for absent. Letters are
/// upper-cased for display.
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match mark {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Misplaced => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

/// Create a bar of remaining attempts, e.g. "●●●○○○"
#[must_use]
pub fn attempts_bar(remaining: u8, budget: u8) -> String {
    let remaining = remaining.min(budget);
    format!(
        "{}{}",
        "●".repeat(usize::from(remaining)),
        "○".repeat(usize::from(budget - remaining))
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
