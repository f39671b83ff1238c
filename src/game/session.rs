//! Game session state machine
//!
//! A session owns one target word and a fixed budget of guesses. The only
//! mutation is `submit_guess`, which moves the session from `InProgress` to
//! `Won` or `Lost`.

use super::GameError;
use crate::core::{Feedback, Guess, Word};
use log::{debug, info};
use rustc_hash::FxHashMap;

/// Total number of guesses allowed in one game
pub const GUESS_BUDGET: u8 = 6;

/// Message returned for every guess once the budget is used up
pub const OUT_OF_GUESSES: &str = "Out of guesses";

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses are still being accepted
    InProgress,
    /// The target was guessed
    Won,
    /// The budget ran out without a match
    Lost,
}

/// Outcome of a single `submit_guess` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Whether the target has been guessed
    pub solved: bool,
    /// Feedback, victory, or out-of-guesses message
    pub message: String,
    /// Per-letter classification, absent once the budget was already used up
    pub feedback: Option<Feedback>,
    /// Attempts left after this call
    pub remaining: u8,
}

/// One game against one hidden target word
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    remaining: u8,
    last_feedback: String,
    status: GameStatus,
    history: Vec<Feedback>,
}

impl GameSession {
    /// Start a game for the given target word
    ///
    /// The word is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `GameError::InvalidTargetWord` if the word is not 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameSession, GUESS_BUDGET};
    ///
    /// let game = GameSession::new("About").unwrap();
    /// assert_eq!(game.target().text(), "about");
    /// assert_eq!(game.remaining_attempts(), GUESS_BUDGET);
    ///
    /// assert!(GameSession::new("").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, GameError> {
        Ok(Self::from_word(Word::new(word)?))
    }

    /// Start a game for an already validated target word
    #[must_use]
    pub fn from_word(target: Word) -> Self {
        debug!("new game, target: {target}");
        Self {
            target,
            remaining: GUESS_BUDGET,
            last_feedback: String::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Submit a guess and get feedback
    ///
    /// Once the budget is used up every call returns `(false, "Out of guesses")`,
    /// even after a win on the last attempt. A game won with attempts to spare
    /// returns the victory result again.
    /// Neither changes any state.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if `input` is not exactly 5
    /// characters. A rejected guess does not use up an attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameSession;
    ///
    /// let mut game = GameSession::new("about").unwrap();
    ///
    /// let result = game.submit_guess("ABCDE").unwrap();
    /// assert!(!result.solved);
    /// assert_eq!(result.message, "C D E are the wrong characters\nA B are in the correct place");
    ///
    /// let result = game.submit_guess("About").unwrap();
    /// assert!(result.solved);
    /// assert_eq!(result.message, "Victory! You guessed in 2 turns.");
    /// ```
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        if self.remaining == 0 {
            return Ok(self.out_of_guesses());
        }
        if self.status == GameStatus::Won {
            return Ok(self.victory());
        }

        let guess = Guess::new(input)?;
        self.remaining = self.remaining.saturating_sub(1);
        debug!("guess {}/{GUESS_BUDGET}: {guess}", self.guesses_used());

        let feedback = Feedback::calculate(&guess, &self.target);
        self.history.push(feedback.clone());

        if guess.matches(self.target.text()) {
            self.status = GameStatus::Won;
            info!(
                "target {} guessed in {} of {GUESS_BUDGET} guesses",
                self.target,
                self.guesses_used()
            );
            let result = self.victory();
            self.last_feedback.clone_from(&result.message);
            return Ok(result);
        }

        if self.remaining == 0 {
            self.status = GameStatus::Lost;
            info!("out of guesses, target was {}", self.target);
        }

        let message = feedback.message();
        self.last_feedback.clone_from(&message);
        Ok(GuessResult {
            solved: false,
            message,
            feedback: Some(feedback),
            remaining: self.remaining,
        })
    }

    fn victory(&self) -> GuessResult {
        let turns = self.guesses_used();
        let unit = if turns == 1 { "turn" } else { "turns" };
        GuessResult {
            solved: true,
            message: format!("Victory! You guessed in {turns} {unit}."),
            feedback: self.history.last().cloned(),
            remaining: self.remaining,
        }
    }

    fn out_of_guesses(&self) -> GuessResult {
        GuessResult {
            solved: false,
            message: OUT_OF_GUESSES.to_string(),
            feedback: None,
            remaining: self.remaining,
        }
    }

    /// Attempts left: budget minus guesses consumed so far
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining
    }

    /// Guesses consumed so far
    #[inline]
    #[must_use]
    pub const fn guesses_used(&self) -> u8 {
        GUESS_BUDGET - self.remaining
    }

    /// Current status of the game
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has reached a terminal state
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Message produced by the most recent accepted guess (empty before the first)
    #[must_use]
    pub fn last_feedback(&self) -> &str {
        &self.last_feedback
    }

    /// Feedback for every accepted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// Letter occurrence counts of the target
    #[must_use]
    pub const fn letter_counts(&self) -> &FxHashMap<char, u8> {
        self.target.letter_counts()
    }

    /// The hidden target word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_initial_state() {
        let game = GameSession::new("SPEED").unwrap();

        assert_eq!(game.target().text(), "speed");
        assert_eq!(game.remaining_attempts(), 6);
        assert_eq!(game.guesses_used(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
        assert_eq!(game.last_feedback(), "");
        assert!(game.history().is_empty());
        assert_eq!(game.letter_counts().get(&'e'), Some(&2));
    }

    #[test]
    fn new_game_rejects_invalid_target() {
        assert!(matches!(
            GameSession::new(""),
            Err(GameError::InvalidTargetWord(_))
        ));
        assert!(matches!(
            GameSession::new("toolong"),
            Err(GameError::InvalidTargetWord(_))
        ));
        assert!(matches!(
            GameSession::new("ab0ut"),
            Err(GameError::InvalidTargetWord(_))
        ));
    }

    #[test]
    fn correct_first_guess_wins_in_one_turn() {
        let mut game = GameSession::new("about").unwrap();
        let result = game.submit_guess("about").unwrap();

        assert!(result.solved);
        assert_eq!(result.message, "Victory! You guessed in 1 turn.");
        assert_eq!(result.remaining, 5);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.last_feedback(), "Victory! You guessed in 1 turn.");
        assert!(result.feedback.is_some_and(|fb| fb.is_solved()));
    }

    #[test]
    fn victory_message_pluralizes_turns() {
        let mut game = GameSession::new("about").unwrap();
        game.submit_guess("XXXXX").unwrap();
        game.submit_guess("YYYYY").unwrap();
        let result = game.submit_guess("ABOUT").unwrap();

        assert!(result.solved);
        assert_eq!(result.message, "Victory! You guessed in 3 turns.");
    }

    #[test]
    fn wrong_guess_decrements_and_reports() {
        let mut game = GameSession::new("about").unwrap();
        let result = game.submit_guess("ABCDE").unwrap();

        assert!(!result.solved);
        assert_eq!(result.remaining, 5);
        assert_eq!(game.remaining_attempts(), 5);
        assert_eq!(
            result.message,
            "C D E are the wrong characters\nA B are in the correct place"
        );
        assert_eq!(game.last_feedback(), result.message);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn invalid_length_does_not_consume_attempt() {
        let mut game = GameSession::new("about").unwrap();

        assert_eq!(
            game.submit_guess("XYZ"),
            Err(GameError::InvalidGuessLength(3))
        );
        assert_eq!(
            game.submit_guess("abcdefg"),
            Err(GameError::InvalidGuessLength(7))
        );
        assert_eq!(game.remaining_attempts(), GUESS_BUDGET);
        assert!(game.history().is_empty());
    }

    #[test]
    fn running_out_of_guesses() {
        let mut game = GameSession::new("about").unwrap();

        for i in 1..=GUESS_BUDGET {
            let result = game.submit_guess("XXXXX").unwrap();
            assert!(!result.solved);
            assert_eq!(result.remaining, GUESS_BUDGET - i);
            assert_eq!(result.message, "X X X X X are the wrong characters");
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_over());

        let result = game.submit_guess("XXXXX").unwrap();
        assert!(!result.solved);
        assert_eq!(result.message, OUT_OF_GUESSES);
        assert!(result.feedback.is_none());
    }

    #[test]
    fn exhausted_game_cannot_be_won() {
        let mut game = GameSession::new("about").unwrap();
        for _ in 0..GUESS_BUDGET {
            game.submit_guess("XXXXX").unwrap();
        }

        let result = game.submit_guess("about").unwrap();
        assert!(!result.solved);
        assert_eq!(result.message, OUT_OF_GUESSES);
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.history().len(), usize::from(GUESS_BUDGET));
        assert_eq!(game.last_feedback(), "X X X X X are the wrong characters");
    }

    #[test]
    fn exhausted_game_ignores_invalid_length() {
        let mut game = GameSession::new("about").unwrap();
        for _ in 0..GUESS_BUDGET {
            game.submit_guess("XXXXX").unwrap();
        }

        let result = game.submit_guess("x").unwrap();
        assert_eq!(result.message, OUT_OF_GUESSES);
    }

    #[test]
    fn winning_on_last_guess() {
        let mut game = GameSession::new("about").unwrap();
        for _ in 1..GUESS_BUDGET {
            game.submit_guess("XXXXX").unwrap();
        }

        let result = game.submit_guess("about").unwrap();
        assert!(result.solved);
        assert_eq!(result.remaining, 0);
        assert_eq!(result.message, "Victory! You guessed in 6 turns.");
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn calls_after_winning_on_last_guess_are_out_of_guesses() {
        let mut game = GameSession::new("about").unwrap();
        for _ in 1..GUESS_BUDGET {
            game.submit_guess("XXXXX").unwrap();
        }
        game.submit_guess("about").unwrap();

        let result = game.submit_guess("about").unwrap();
        assert!(!result.solved);
        assert_eq!(result.message, OUT_OF_GUESSES);
        assert!(result.feedback.is_none());
        assert_eq!(result.remaining, 0);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), usize::from(GUESS_BUDGET));
    }

    #[test]
    fn post_win_calls_are_a_no_op() {
        let mut game = GameSession::new("about").unwrap();
        game.submit_guess("ABCDE").unwrap();
        let won = game.submit_guess("about").unwrap();

        let again = game.submit_guess("XXXXX").unwrap();
        assert_eq!(again, won);
        assert_eq!(game.remaining_attempts(), 4);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn history_records_accepted_guesses() {
        let mut game = GameSession::new("speed").unwrap();
        game.submit_guess("ERASE").unwrap();
        assert!(game.submit_guess("ab").is_err());
        game.submit_guess("SPEED").unwrap();

        let rows: Vec<String> = game.history().iter().map(Feedback::to_emoji).collect();
        assert_eq!(rows, ["🟨⬜⬜🟨🟨", "🟩🟩🟩🟩🟩"]);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let mut first = GameSession::new("speed").unwrap();
        let second = GameSession::new("about").unwrap();

        first.submit_guess("ERASE").unwrap();
        first.submit_guess("EEEEE").unwrap();

        assert_eq!(second.remaining_attempts(), GUESS_BUDGET);
        assert!(second.history().is_empty());
        assert_eq!(first.letter_counts().get(&'e'), Some(&2));
    }

    #[test]
    fn frequency_budget_resets_every_guess() {
        let mut game = GameSession::new("speed").unwrap();

        let first = game.submit_guess("EEXXX").unwrap();
        let second = game.submit_guess("EEXXX").unwrap();
        assert_eq!(first.message, second.message);
    }
}
