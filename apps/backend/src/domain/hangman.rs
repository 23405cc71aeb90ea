use rand::seq::IndexedRandom;

use crate::entities::games::GameState;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MAX_GUESSES: u8 = 6;
pub const PLACEHOLDER: char = '_';

/// Words handed out when a game is created without one.
pub const SEED_WORDS: &[&str] = &[
    "pineapple",
    "rustacean",
    "borrow",
    "lifetime",
    "closure",
    "iterator",
    "pattern",
    "trait",
    "compiler",
    "ownership",
];

/// Picks a word for a new game at random.
pub fn pick_word() -> &'static str {
    SEED_WORDS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("hangman")
}

/// A word must be non-empty and made of ASCII letters only.
pub fn validate_word(word: &str) -> Result<(), DomainError> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidWord,
            "A word must contain only letters",
        ));
    }
    Ok(())
}

/// Parse a raw guess into its letter. Anything other than exactly one ASCII
/// letter is rejected.
pub fn parse_guess(input: &str) -> Result<char, DomainError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidGuess,
            "A guess must be a single letter",
        )),
    }
}

/// One placeholder per character of `word`.
pub fn mask(word: &str) -> String {
    word.chars().map(|_| PLACEHOLDER).collect()
}

/// Reveal every position of `word` holding `letter`, keeping what `matched`
/// already shows elsewhere.
pub fn reveal(word: &str, matched: &str, letter: char) -> String {
    let mut shown = matched.chars();
    word.chars()
        .map(|w| {
            let current = shown.next().unwrap_or(PLACEHOLDER);
            if w == letter {
                w
            } else {
                current
            }
        })
        .collect()
}

/// Won beats lost: a fully revealed word is a win even at zero guesses.
pub fn resolve_state(word: &str, letters_matched: &str, remaining_guesses: u8) -> GameState {
    if letters_matched == word {
        GameState::Won
    } else if remaining_guesses == 0 {
        GameState::Lost
    } else {
        GameState::Started
    }
}

/// The mutable part of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub letters_guessed: String,
    pub letters_matched: String,
    pub remaining_guesses: u8,
    pub state: GameState,
}

impl Progress {
    /// Progress of a game nobody has guessed on yet.
    pub fn fresh(word: &str) -> Self {
        Self {
            letters_guessed: String::new(),
            letters_matched: mask(word),
            remaining_guesses: MAX_GUESSES,
            state: GameState::Started,
        }
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.letters_guessed.contains(letter)
    }
}

/// Evaluate one guess against `word`.
///
/// A letter already guessed leaves the letters and the guess count alone;
/// only the state is recomputed. Matching is case-sensitive. Callers are
/// expected to reject guesses on finished games before getting here.
pub fn apply_guess(word: &str, progress: &Progress, letter: char) -> Progress {
    let mut next = progress.clone();

    if !progress.has_guessed(letter) {
        next.letters_guessed.push(letter);
        if word.contains(letter) {
            next.letters_matched = reveal(word, &progress.letters_matched, letter);
        } else {
            next.remaining_guesses = next.remaining_guesses.saturating_sub(1);
        }
    }

    next.state = resolve_state(word, &next.letters_matched, next.remaining_guesses);
    next
}
