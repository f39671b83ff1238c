//! Terminal output formatting
//!
//! Display utilities for game results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_guess_result, print_new_game,
    print_statistics, print_welcome,
};
