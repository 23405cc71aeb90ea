//! Game lifecycle and guess evaluation.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::adapters::games_sea::GameUpdate;
use crate::domain::hangman::{self, Progress};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{Game, GameCounts, GameRepo};

/// Game domain service.
///
/// Holds no state of its own beyond the repository handle, so cloning is cheap
/// and every actix worker can share one instance.
#[derive(Clone)]
pub struct GameService {
    repo: Arc<dyn GameRepo>,
}

impl GameService {
    pub fn new(repo: Arc<dyn GameRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        let games = self.repo.list_all().await?;
        debug!(count = games.len(), "Listed games");
        Ok(games)
    }

    pub async fn game_counts(&self) -> Result<GameCounts, DomainError> {
        let counts = self.repo.count_by_state().await?;
        debug!(total = counts.total, started = counts.started, "Counted games");
        Ok(counts)
    }

    /// `None` when the id is unknown or is not a UUID at all.
    pub async fn get_game_by_id(&self, id: &str) -> Result<Option<Game>, DomainError> {
        let Some(uuid) = parse_id(id) else {
            debug!(game_id = %id, "Game id is not a UUID");
            return Ok(None);
        };
        let game = self.repo.find_by_id(uuid).await?;
        debug!(game_id = %uuid, found = game.is_some(), "Loaded game");
        Ok(game)
    }

    /// Start a new game. Without a word, one is picked from the seed list.
    pub async fn create_game(&self, word: Option<String>) -> Result<Game, DomainError> {
        let word = word.unwrap_or_else(|| hangman::pick_word().to_string());
        hangman::validate_word(&word)?;

        let now = OffsetDateTime::now_utc();
        let progress = Progress::fresh(&word);
        let game = Game {
            id: Uuid::new_v4(),
            word_length: word.chars().count().to_string(),
            word,
            letters_guessed: progress.letters_guessed,
            letters_matched: progress.letters_matched,
            remaining_guesses: progress.remaining_guesses,
            state: progress.state,
            created_on: now,
            updated_on: now,
        };

        let created = self.repo.insert(&game).await?;
        info!(game_id = %created.id, word_length = %created.word_length, "Game created");
        Ok(created)
    }

    /// Submit one letter against a game and return the game as stored afterwards.
    pub async fn update_game(&self, id: &str, letter: &str) -> Result<Game, DomainError> {
        let letter = hangman::parse_guess(letter).inspect_err(|_| {
            warn!(game_id = %id, "Rejected malformed guess");
        })?;

        let uuid = parse_id(id).ok_or_else(|| DomainError::game_not_found(id))?;
        let game = self
            .repo
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| DomainError::game_not_found(uuid))?;

        if game.state.is_terminal() {
            warn!(game_id = %uuid, state = %game.state, "Guess on finished game");
            return Err(DomainError::conflict(
                ConflictKind::GameOver,
                format!("Game {uuid} is already {}.", game.state),
            ));
        }

        let before = Progress {
            letters_guessed: game.letters_guessed.clone(),
            letters_matched: game.letters_matched.clone(),
            remaining_guesses: game.remaining_guesses,
            state: game.state,
        };
        let after = hangman::apply_guess(&game.word, &before, letter);

        let update = GameUpdate::new(uuid)
            .with_letters_guessed(after.letters_guessed)
            .with_letters_matched(after.letters_matched)
            .with_remaining_guesses(after.remaining_guesses)
            .with_state(after.state);

        if self.repo.update_by_id(update).await? == 0 {
            return Err(DomainError::game_not_found(uuid));
        }

        let updated = self
            .repo
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| DomainError::game_not_found(uuid))?;

        info!(
            game_id = %uuid,
            letter = %letter,
            repeated = before.has_guessed(letter),
            remaining_guesses = updated.remaining_guesses,
            state = %updated.state,
            "Guess applied"
        );
        Ok(updated)
    }

    /// Deleting a game that does not exist is not an error.
    pub async fn delete_game(&self, id: &str) -> Result<(), DomainError> {
        let Some(uuid) = parse_id(id) else {
            debug!(game_id = %id, "Delete of non-UUID id is a no-op");
            return Ok(());
        };
        let rows = self.repo.delete_by_id(uuid).await?;
        info!(game_id = %uuid, deleted = rows > 0, "Game deleted");
        Ok(())
    }
}

// A string that is not a UUID can never match a row.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}
