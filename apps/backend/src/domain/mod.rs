//! Domain layer: pure hangman rules, no I/O.

pub mod hangman;


pub use hangman::{apply_guess, parse_guess, pick_word, validate_word, Progress};
