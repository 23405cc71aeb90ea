use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

const PG_CONNECT_ATTEMPTS: u32 = 10;
const PG_RETRY_INTERVAL_MS: u64 = 500;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const POOL_MAX: u32 = 10;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt after all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(ACQUIRE_TIMEOUT).sqlx_logging(false);
    match kind {
        // Each connection to sqlite::memory: gets its own database, so pin the pool to one.
        DbKind::SqliteMemory => opt.min_connections(1).max_connections(1),
        DbKind::SqliteFile | DbKind::Postgres => opt.max_connections(POOL_MAX),
    };
    opt
}

/// Open a pool for the given engine. This function does NOT run any migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;

    match kind {
        // SQLite connections don't need retry since they're local
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            Ok(Database::connect(connect_options(kind, url)).await?)
        }
        DbKind::Postgres => {
            retry_connection(
                || {
                    let opt = connect_options(kind, url.clone());
                    async move { Database::connect(opt).await.map_err(AppError::from) }
                },
                PG_CONNECT_ATTEMPTS,
                PG_RETRY_INTERVAL_MS,
            )
            .await
        }
    }
}

/// Connect and bring the schema up to date. Single entrypoint used by startup and tests.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    info!(db_kind = ?kind, "bootstrap=start");

    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;

    info!(db_kind = ?kind, "bootstrap=ready");
    Ok(conn)
}
