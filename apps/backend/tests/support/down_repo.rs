//! A games store that is always down.

use std::sync::Arc;

use async_trait::async_trait;
use backend::adapters::games_sea::GameUpdate;
use backend::errors::domain::{DomainError, InfraErrorKind};
use backend::infra::state::build_state;
use backend::repos::games::{Game, GameRepo};
use backend::services::games::GameService;
use backend::state::app_state::AppState;
use uuid::Uuid;

pub struct DownRepo;

pub fn down() -> DomainError {
    DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
}

#[async_trait]
impl GameRepo for DownRepo {
    async fn list_all(&self) -> Result<Vec<Game>, DomainError> {
        Err(down())
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Game>, DomainError> {
        Err(down())
    }
    async fn insert(&self, _game: &Game) -> Result<Game, DomainError> {
        Err(down())
    }
    async fn update_by_id(&self, _update: GameUpdate) -> Result<u64, DomainError> {
        Err(down())
    }
    async fn delete_by_id(&self, _id: Uuid) -> Result<u64, DomainError> {
        Err(down())
    }
}

/// State whose game service runs on [`DownRepo`], with no database connection.
pub async fn down_state() -> AppState {
    build_state()
        .with_game_service(GameService::new(Arc::new(DownRepo)))
        .build()
        .await
        .expect("state with failing repo")
}
