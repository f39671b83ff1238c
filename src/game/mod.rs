//! Game session and guess lifecycle
//!
//! A caller draws a target from a `WordSource`, builds a `GameSession`, and
//! submits guesses until the session reports a win or runs out of attempts.

mod error;
mod session;

pub use error::GameError;
pub use session::{GUESS_BUDGET, GameSession, GameStatus, GuessResult, OUT_OF_GUESSES};
