//! Game repository: the storage contract the game service depends on.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::games_sea::{self as games_adapter, GameCreate, GameUpdate};
use crate::entities::games;
use crate::entities::games::GameState;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// Game domain model
///
/// Converted from the database model (`games::Model`) when loaded through a
/// `GameRepo`. This is also the JSON shape returned by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub word: String,
    pub word_length: String,
    pub letters_guessed: String,
    pub letters_matched: String,
    pub remaining_guesses: u8,
    pub state: GameState,
    #[serde(with = "time::serde::rfc3339")]
    pub created_on: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_on: OffsetDateTime,
}

/// Number of stored games, in total and per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameCounts {
    pub total: u64,
    pub started: u64,
    pub won: u64,
    pub lost: u64,
}

impl GameCounts {
    pub fn add(&mut self, state: GameState, n: u64) {
        match state {
            GameState::Started => self.started += n,
            GameState::Won => self.won += n,
            GameState::Lost => self.lost += n,
        }
        self.total += n;
    }

    pub fn tally<'a>(games: impl IntoIterator<Item = &'a Game>) -> Self {
        let mut counts = Self::default();
        for game in games {
            counts.add(game.state, 1);
        }
        counts
    }
}

/// Row-level operations over the games relation. No business rules live here.
#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Game>, DomainError>;

    /// `None` when no game has this id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DomainError>;

    async fn insert(&self, game: &Game) -> Result<Game, DomainError>;

    /// Returns the affected-row count; 0 is not an error at this layer.
    async fn update_by_id(&self, update: GameUpdate) -> Result<u64, DomainError>;

    /// Returns the affected-row count; deleting an absent id yields 0.
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, DomainError>;

    /// Games per state. Stores without an aggregate query can rely on this tally.
    async fn count_by_state(&self) -> Result<GameCounts, DomainError> {
        let games = self.list_all().await?;
        Ok(GameCounts::tally(&games))
    }
}

/// SeaORM implementation of GameRepo.
#[derive(Debug, Clone)]
pub struct GameRepoSea {
    db: DatabaseConnection,
}

impl GameRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameRepo for GameRepoSea {
    async fn list_all(&self) -> Result<Vec<Game>, DomainError> {
        games_adapter::list_all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Game::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DomainError> {
        games_adapter::find_by_id(&self.db, id)
            .await
            .map_err(map_db_err)?
            .map(Game::try_from)
            .transpose()
    }

    async fn insert(&self, game: &Game) -> Result<Game, DomainError> {
        let model = games_adapter::create_game(&self.db, GameCreate::from(game))
            .await
            .map_err(map_db_err)?;
        Game::try_from(model)
    }

    async fn update_by_id(&self, update: GameUpdate) -> Result<u64, DomainError> {
        games_adapter::update_game(&self.db, update)
            .await
            .map_err(map_db_err)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, DomainError> {
        games_adapter::delete_game(&self.db, id)
            .await
            .map_err(map_db_err)
    }

    async fn count_by_state(&self) -> Result<GameCounts, DomainError> {
        let rows = games_adapter::count_by_state(&self.db)
            .await
            .map_err(map_db_err)?;

        let mut counts = GameCounts::default();
        for (state, n) in rows {
            let n = u64::try_from(n).map_err(|_| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Negative game count {n} for state {state}"),
                )
            })?;
            counts.add(state, n);
        }
        Ok(counts)
    }
}

// Conversions between SeaORM models and domain models

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        let remaining_guesses = u8::try_from(model.remaining_guesses).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "Game {} has out-of-range remainingGuesses {}",
                    model.id, model.remaining_guesses
                ),
            )
        })?;

        Ok(Self {
            id: model.id,
            word: model.word,
            word_length: model.word_length,
            letters_guessed: model.letters_guessed,
            letters_matched: model.letters_matched,
            remaining_guesses,
            state: model.state,
            created_on: model.created_on,
            updated_on: model.updated_on,
        })
    }
}

impl From<&Game> for GameCreate {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            word: game.word.clone(),
            word_length: game.word_length.clone(),
            letters_guessed: game.letters_guessed.clone(),
            letters_matched: game.letters_matched.clone(),
            remaining_guesses: i32::from(game.remaining_guesses),
            state: game.state,
            created_on: game.created_on,
        }
    }
}
