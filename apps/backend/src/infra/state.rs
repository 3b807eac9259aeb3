use std::sync::Arc;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::stats::StatsCache;
use crate::state::app_state::AppState;
use crate::words::{WordList, WordSource};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    words: Option<Arc<dyn WordSource>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_profile: None,
            words: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_words(mut self, words: Arc<dyn WordSource>) -> Self {
        self.words = Some(words);
        self
    }

    /// Connects and migrates when a profile was given; defaults the word
    /// source to `WordList::from_env()`.
    pub async fn build(self) -> Result<AppState, AppError> {
        let words = match self.words {
            Some(words) => words,
            None => Arc::new(WordList::from_env()?),
        };
        let stats = StatsCache::new();

        match self.db_profile {
            Some(profile) => {
                let conn = bootstrap_db(&profile).await?;
                Ok(AppState::new(conn, words, stats))
            }
            None => Ok(AppState::without_db(words, stats)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
