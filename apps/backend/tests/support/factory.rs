//! State and game factories for integration tests.

use backend::config::db::DbKind;
use backend::infra::state::build_state;
use backend::repos::games::Game;
use backend::state::app_state::AppState;
use migration::seed;

/// Fresh in-memory database with the schema applied and no games.
pub async fn memory_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build state on in-memory sqlite")
}

/// Like [`memory_state`], with the fixed seed games inserted.
pub async fn seeded_state() -> AppState {
    let state = memory_state().await;
    let db = state.db().expect("memory state has a db");
    seed(db).await.expect("seed games");
    state
}

/// Create a game with a known word through the service.
pub async fn game_with_word(state: &AppState, word: &str) -> Game {
    state
        .games()
        .create_game(Some(word.to_string()))
        .await
        .expect("create game")
}
