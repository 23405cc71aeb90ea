//! Readiness check: reports the applied schema and how many games each state holds.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use serde::Serialize;
use tracing::warn;

use crate::db::require_db;
use crate::repos::games::GameCounts;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    /// Latest applied migration; `None` without a SeaORM connection.
    migration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    games: Option<GameCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// 200 while the games store answers, 503 otherwise. Never an error body.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let migration = match require_db(&app_state) {
        Ok(db) => get_latest_migration_version(db).await.ok().flatten(),
        Err(_) => None,
    };

    let (status, report) = match app_state.games().game_counts().await {
        Ok(games) => (
            StatusCode::OK,
            HealthReport {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                migration,
                games: Some(games),
                error: None,
            },
        ),
        Err(e) => {
            warn!(error = %e, "Games store unreachable from health check");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthReport {
                    status: "degraded",
                    version: env!("CARGO_PKG_VERSION"),
                    migration,
                    games: None,
                    error: Some(e.to_string()),
                },
            )
        }
    };

    HttpResponse::build(status).json(report)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
