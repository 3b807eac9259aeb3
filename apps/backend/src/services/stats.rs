//! Cached aggregate statistics over open games.
//!
//! The only aggregate is the mean number of moves left across unfinished
//! games. It is recomputed off the request path after a game is created.

use moka::future::Cache;
use sea_orm::ConnectionTrait;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::repos::games as games_repo;
use crate::state::app_state::AppState;

/// Fixed cache key of the average-moves sentence.
pub const MOVES_REMAINING: &str = "MOVES_REMAINING";

#[derive(Clone)]
pub struct StatsCache {
    inner: Cache<&'static str, String>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self {
            inner: Cache::builder().max_capacity(16).build(),
        }
    }

    pub async fn get(&self, key: &'static str) -> Option<String> {
        self.inner.get(&key).await
    }

    pub async fn set(&self, key: &'static str, value: String) {
        self.inner.insert(key, value).await;
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StatsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

/// Sentence stored under [`MOVES_REMAINING`].
pub fn format_average(mean: f64) -> String {
    format!("The average moves remaining is {mean:.2}")
}

/// Mean of `limit - progress` over every open game, or `None` when there are none.
pub async fn average_moves_remaining<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<f64>, AppError> {
    let open = games_repo::list_all_open(conn).await?;
    if open.is_empty() {
        return Ok(None);
    }
    let total: i64 = open
        .iter()
        .map(|g| i64::from(g.state.attempts_limit - g.state.attempts_progress))
        .sum();
    Ok(Some(total as f64 / open.len() as f64))
}

/// Recompute and store the aggregate. With no open games the cached value is left as is.
pub async fn recompute_average_attempts(state: &AppState) -> Result<(), AppError> {
    let db = crate::db::require_db(state)?;
    match average_moves_remaining(db).await? {
        Some(mean) => {
            let sentence = format_average(mean);
            debug!(mean, "average moves remaining recomputed");
            state.stats.set(MOVES_REMAINING, sentence).await;
        }
        None => debug!("no open games; average moves remaining left untouched"),
    }
    Ok(())
}

/// Fire-and-forget recompute. Failures are logged and the cache stays stale.
pub fn spawn_recompute(state: &AppState) {
    let state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = recompute_average_attempts(&state).await {
            warn!(error = %e, "average moves recompute failed");
        }
    });
}

/// The cached sentence, or an empty string when never computed.
pub async fn get_average_attempts(state: &AppState) -> String {
    state.stats.get(MOVES_REMAINING).await.unwrap_or_default()
}
