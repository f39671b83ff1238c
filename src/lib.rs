//! Wordle Game
//!
//! A five-letter word guessing game: a session scores guesses against a
//! secret target with Wordle-style feedback and enforces a budget of six
//! guesses. Targets come from a seeded random word source.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::GameSession;
//!
//! let mut game = GameSession::new("about").unwrap();
//!
//! let result = game.submit_guess("ABCDE").unwrap();
//! assert!(!result.solved);
//! assert_eq!(result.remaining, 5);
//! println!("{}", result.message);
//!
//! let result = game.submit_guess("about").unwrap();
//! assert!(result.solved);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists and random target selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
