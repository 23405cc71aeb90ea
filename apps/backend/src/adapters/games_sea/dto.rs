//! DTOs for games_sea adapter.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::games::GameState;

/// DTO for inserting a new game row. Every column is supplied by the caller.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: Uuid,
    pub word: String,
    pub word_length: String,
    pub letters_guessed: String,
    pub letters_matched: String,
    pub remaining_guesses: i32,
    pub state: GameState,
    pub created_on: OffsetDateTime,
}

/// Partial update of a game row.
///
/// Only the fields that are `Some` are written; `updatedOn` is always refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct GameUpdate {
    pub id: Uuid,
    pub letters_guessed: Option<String>,
    pub letters_matched: Option<String>,
    pub remaining_guesses: Option<u8>,
    pub state: Option<GameState>,
}

impl GameUpdate {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            letters_guessed: None,
            letters_matched: None,
            remaining_guesses: None,
            state: None,
        }
    }

    pub fn with_letters_guessed(mut self, letters: impl Into<String>) -> Self {
        self.letters_guessed = Some(letters.into());
        self
    }

    pub fn with_letters_matched(mut self, letters: impl Into<String>) -> Self {
        self.letters_matched = Some(letters.into());
        self
    }

    pub fn with_remaining_guesses(mut self, remaining: u8) -> Self {
        self.remaining_guesses = Some(remaining);
        self
    }

    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }
}
