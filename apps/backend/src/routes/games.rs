//! Game-related HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::{OptionalJson, ValidatedJson};
use crate::state::app_state::AppState;

/// Body of POST /api/v1/games. Without a word the server picks one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub word: Option<String>,
}

/// Body of PUT /api/v1/games/{id}.
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    // Older clients send the guess as `lettersGuessed`.
    #[serde(default, alias = "lettersGuessed")]
    pub letter: Option<String>,
}

/// GET /api/v1/games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = app_state.games().list_games().await?;
    Ok(HttpResponse::Ok().json(games))
}

/// GET /api/v1/games/{id}
async fn get_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let game = app_state
        .games()
        .get_game_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::game_not_found(&id))?;
    Ok(HttpResponse::Ok().json(game))
}

/// POST /api/v1/games
async fn create_game(
    body: OptionalJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let word = body.into_inner().unwrap_or_default().word;
    let game = app_state.games().create_game(word).await?;
    Ok(HttpResponse::Created().json(game))
}

/// PUT /api/v1/games/{id}
///
/// Submits one letter. A missing letter is treated like an empty guess and
/// rejected by the service with the usual validation message.
async fn guess(
    path: web::Path<String>,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let letter = body.into_inner().letter.unwrap_or_default();
    let game = app_state.games().update_game(&id, &letter).await?;
    Ok(HttpResponse::Ok().json(game))
}

/// DELETE /api/v1/games/{id}
async fn delete_game(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.games().delete_game(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Routes relative to the `/api/v1/games` scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for root in ["", "/"] {
        cfg.service(
            web::resource(root)
                .route(web::get().to(list_games))
                .route(web::post().to(create_game)),
        );
    }
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_game))
            .route(web::put().to(guess))
            .route(web::delete().to(delete_game)),
    );
}
