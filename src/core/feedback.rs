//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as one of:
//! - Absent (letter not in the target, or every occurrence already credited)
//! - Misplaced (letter in the target, but somewhere else)
//! - Correct (letter in the right position)
//!
//! A letter that occurs k times in the target is credited (correct or
//! misplaced) at most k times in a single guess.

use super::word::WORD_LENGTH;
use super::{Guess, Word};

/// Suffix for the absent section of a feedback message
pub const ABSENT_SUFFIX: &str = "are the wrong characters";
/// Suffix for the misplaced section of a feedback message
pub const MISPLACED_SUFFIX: &str = "are not in the correct place";
/// Suffix for the correct section of a feedback message
pub const CORRECT_SUFFIX: &str = "are in the correct place";

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Gray
    Absent,
    /// Yellow
    Misplaced,
    /// Green
    Correct,
}

/// Feedback for one guess against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    letters: [char; WORD_LENGTH],
    marks: [LetterFeedback; WORD_LENGTH],
}

impl Feedback {
    /// Classify every letter of `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Copy the target's letter counts; this copy is the occurrence budget for this guess only
    /// 2. First pass: mark exact matches (greens) and take them out of the budget
    /// 3. Second pass, left to right: mark a letter misplaced while its budget lasts, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Guess, LetterFeedback, Word};
    ///
    /// let target = Word::new("about").unwrap();
    /// let guess = Guess::new("ABCDE").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.marks()[0], LetterFeedback::Correct);
    /// assert_eq!(feedback.marks()[2], LetterFeedback::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, target: &Word) -> Self {
        let mut marks = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = target.letter_counts().clone();

        // Allow: Index needed to access guess[i], target[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if letter == target.char_at(i) {
                marks[i] = LetterFeedback::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                marks[i] = LetterFeedback::Misplaced;
                *count -= 1;
            }
        }

        let letters = std::array::from_fn(|i| guess.typed_at(i));
        Self { letters, marks }
    }

    /// Classification of each position
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.marks
    }

    /// Guessed letters as typed
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Positions whose letter is not (or no longer) available in the target
    #[must_use]
    pub fn absent(&self) -> [bool; WORD_LENGTH] {
        self.flags(LetterFeedback::Absent)
    }

    /// Positions whose letter is in the target at another position
    #[must_use]
    pub fn misplaced(&self) -> [bool; WORD_LENGTH] {
        self.flags(LetterFeedback::Misplaced)
    }

    /// Positions whose letter matches the target exactly
    #[must_use]
    pub fn correct(&self) -> [bool; WORD_LENGTH] {
        self.flags(LetterFeedback::Correct)
    }

    fn flags(&self, kind: LetterFeedback) -> [bool; WORD_LENGTH] {
        self.marks.map(|mark| mark == kind)
    }

    /// Number of positions with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.marks.iter().filter(|&&mark| mark == kind).count()
    }

    /// Check if every letter is in the correct place
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.count(LetterFeedback::Correct) == WORD_LENGTH
    }

    /// Build the human-readable feedback message
    ///
    /// Sections appear in fixed order (absent, misplaced, correct), one per
    /// line, and empty categories are left out.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Guess, Word};
    ///
    /// let target = Word::new("about").unwrap();
    /// let guess = Guess::new("ABCDE").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::calculate(&guess, &target).message(),
    ///     "C D E are the wrong characters\nA B are in the correct place"
    /// );
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        [
            self.section(&self.absent(), ABSENT_SUFFIX),
            self.section(&self.misplaced(), MISPLACED_SUFFIX),
            self.section(&self.correct(), CORRECT_SUFFIX),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
    }

    fn section(&self, flags: &[bool], suffix: &str) -> Option<String> {
        if !any_true(flags) {
            return None;
        }

        let mut section = String::new();
        for (&letter, _) in self.letters.iter().zip(flags).filter(|&(_, &flag)| flag) {
            section.push(letter);
            section.push(' ');
        }
        section.push_str(suffix);
        Some(section)
    }

    /// Convert feedback to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨".
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Misplaced => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}

/// Whether any entry of a classification vector is set
#[inline]
#[must_use]
pub fn any_true(flags: &[bool]) -> bool {
    flags.iter().any(|&flag| flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterFeedback::{Absent, Correct, Misplaced};

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Guess::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_correct() {
        let fb = feedback("crane", "crane");
        assert_eq!(fb.marks(), &[Correct; 5]);
        assert!(fb.is_solved());
        assert_eq!(fb.message(), "c r a n e are in the correct place");
    }

    #[test]
    fn all_absent() {
        let fb = feedback("fghij", "about");
        assert_eq!(fb.marks(), &[Absent; 5]);
        assert_eq!(fb.message(), "f g h i j are the wrong characters");
    }

    #[test]
    fn case_insensitive_with_typed_letters_in_message() {
        let fb = feedback("ABCDE", "about");
        assert_eq!(fb.correct(), [true, true, false, false, false]);
        assert_eq!(fb.absent(), [false, false, true, true, true]);
        assert_eq!(fb.misplaced(), [false; 5]);
        assert_eq!(
            fb.message(),
            "C D E are the wrong characters\nA B are in the correct place"
        );
    }

    #[test]
    fn misplaced_letters() {
        let fb = feedback("tuoba", "about");
        assert_eq!(fb.marks(), &[Misplaced, Misplaced, Correct, Misplaced, Misplaced]);
        assert_eq!(
            fb.message(),
            "t u b a are not in the correct place\no are in the correct place"
        );
    }

    #[test]
    fn repeated_target_letter_credited_twice() {
        // SPEED has two E's, ERASE has two E's: both credited
        let fb = feedback("ERASE", "speed");
        assert_eq!(fb.marks(), &[Misplaced, Absent, Absent, Misplaced, Misplaced]);
        assert_eq!(
            fb.message(),
            "R A are the wrong characters\nE S E are not in the correct place"
        );
    }

    #[test]
    fn surplus_occurrence_marked_absent() {
        // Three E's guessed against two in SPEED: the third is absent
        let fb = feedback("EEEXX", "speed");
        assert_eq!(fb.marks(), &[Misplaced, Absent, Correct, Absent, Absent]);
        let credited = fb
            .letters()
            .iter()
            .zip(fb.marks())
            .filter(|&(&l, &m)| l == 'E' && m != Absent)
            .count();
        assert_eq!(credited, 2);
    }

    #[test]
    fn greens_take_priority_over_earlier_yellows() {
        // HELLO has L at 2 and 3; both are claimed by greens before any yellow
        let fb = feedback("lllll", "hello");
        assert_eq!(fb.marks(), &[Absent, Absent, Correct, Correct, Absent]);
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR: R(yellow) O(yellow) B(gray) O(green) T(gray)
        let fb = feedback("robot", "floor");
        assert_eq!(fb.marks(), &[Misplaced, Misplaced, Absent, Correct, Absent]);
        assert_eq!(fb.count(Misplaced), 2);
        assert_eq!(fb.count(Correct), 1);
    }

    #[test]
    fn non_letters_are_absent() {
        let fb = feedback("12345", "about");
        assert_eq!(fb.absent(), [true; 5]);
    }

    #[test]
    fn emoji_rendering() {
        let fb = feedback("robot", "floor");
        assert_eq!(fb.to_emoji(), "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn any_true_aggregation() {
        assert!(!any_true(&[false, false, false]));
        assert!(any_true(&[true, true, true]));
        assert!(any_true(&[false, true, false]));
        assert!(!any_true(&[]));
    }
}
