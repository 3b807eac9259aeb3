use std::env;

use crate::error::AppError;

/// Which database the backend talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Postgres, from `DATABASE_URL` or the `POSTGRES_*` variables
    Prod,
    /// SQLite file on disk (created if missing)
    SqliteFile { path: String },
    /// Private SQLite in-memory database, used by tests
    InMemory,
}

impl DbProfile {
    /// `SQLITE_FILE` selects a SQLite file; otherwise Postgres.
    pub fn from_env() -> Self {
        match env::var("SQLITE_FILE") {
            Ok(path) if !path.trim().is_empty() => DbProfile::SqliteFile { path },
            _ => DbProfile::Prod,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        matches!(self, DbProfile::InMemory)
    }
}

/// Connection URL for `profile`.
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            if let Ok(url) = env::var("DATABASE_URL") {
                return Ok(url);
            }
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("PROD_DB")?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::SqliteFile { path } => Ok(format!("sqlite://{path}?mode=rwc")),
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
