use std::env;

use crate::error::AppError;

/// Which database engine the backend talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL (production)
    Postgres,
    /// SQLite file on disk
    SqliteFile,
    /// Private in-memory SQLite database (tests, demos)
    SqliteMemory,
}

impl DbKind {
    /// Read `HANGMAN_DB` (`postgres` | `sqlite-file` | `sqlite-memory`), defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("HANGMAN_DB") {
            Ok(value) => value.parse(),
            Err(_) => Ok(DbKind::Postgres),
        }
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

impl std::str::FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported database kind '{other}'. Use: postgres | sqlite-file | sqlite-memory"
            ))),
        }
    }
}

/// Builds a database URL for the given engine.
///
/// `DATABASE_URL` wins when set (except for in-memory SQLite). Otherwise the URL is
/// assembled from `POSTGRES_*` variables or `SQLITE_PATH`.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    if kind == DbKind::SqliteMemory {
        return Ok("sqlite::memory:".to_string());
    }

    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("POSTGRES_DB")?;
            let username = must_var("POSTGRES_USER")?;
            let password = must_var("POSTGRES_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = env::var("SQLITE_PATH").unwrap_or_else(|_| "hangman.db".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
