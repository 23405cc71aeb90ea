use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    games: Option<GameService>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    /// Serve games from this service instead of the database-backed one.
    pub fn with_game_service(mut self, games: GameService) -> Self {
        self.games = Some(games);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match (self.db_kind, self.games) {
            (None, Some(games)) => Ok(AppState::without_db(games)),
            (Some(kind), games) => {
                // single entrypoint: build + migrate
                let conn = bootstrap_db(kind).await?;
                Ok(match games {
                    Some(games) => AppState::with_service(conn, games),
                    None => AppState::new(conn),
                })
            }
            (None, None) => Err(AppError::config(
                "State needs a database or a game service",
            )),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
