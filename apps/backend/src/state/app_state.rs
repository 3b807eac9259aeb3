use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::stats::StatsCache;
use crate::words::WordSource;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Where new games get their secret word
    pub words: Arc<dyn WordSource>,
    /// Cached aggregate statistics
    pub stats: StatsCache,
}

impl AppState {
    pub fn new(db: DatabaseConnection, words: Arc<dyn WordSource>, stats: StatsCache) -> Self {
        Self {
            db: Some(db),
            words,
            stats,
        }
    }

    pub fn without_db(words: Arc<dyn WordSource>, stats: StatsCache) -> Self {
        Self {
            db: None,
            words,
            stats,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .finish_non_exhaustive()
    }
}
