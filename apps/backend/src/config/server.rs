use std::env;

use crate::config::db::DbKind;
use crate::error::AppError;

/// Process-level settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db: DbKind,
}

impl ServerConfig {
    /// Reads `HANGMAN_HOST`, `HANGMAN_PORT` and `HANGMAN_DB`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HANGMAN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("HANGMAN_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("HANGMAN_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            host,
            port,
            db: DbKind::from_env()?,
        })
    }
}
