use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repos::games::GameRepoSea;
use crate::services::games::GameService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when the service runs on a non-SeaORM repository)
    db: Option<DatabaseConnection>,
    /// Game service backed by the configured repository
    games: GameService,
}

impl AppState {
    /// Create a new AppState whose game service stores games through `db`
    pub fn new(db: DatabaseConnection) -> Self {
        let games = GameService::new(Arc::new(GameRepoSea::new(db.clone())));
        Self {
            db: Some(db),
            games,
        }
    }

    /// Create an AppState with a database connection and a separately built service
    pub fn with_service(db: DatabaseConnection, games: GameService) -> Self {
        Self {
            db: Some(db),
            games,
        }
    }

    /// Create an AppState around an existing service, without a database connection
    pub fn without_db(games: GameService) -> Self {
        Self { db: None, games }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn games(&self) -> &GameService {
        &self.games
    }
}
