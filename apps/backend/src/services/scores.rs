//! Score listings, leaderboard and per-user rankings.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::macros::format_description;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::{self as games_repo, Game};
use crate::repos::scores::{self as scores_repo, Score};
use crate::repos::users as users_repo;
use crate::state::app_state::AppState;

/// Upper bound accepted for `get_high_scores`.
pub const MAX_HIGH_SCORES: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreView {
    pub game_id: i64,
    pub user_name: String,
    /// `YYYY-MM-DD` of when the score was recorded.
    pub date: String,
    pub won: bool,
    pub guess_count: i32,
    pub guesses_remaining: i32,
    pub history: Vec<String>,
    pub norm_score: f64,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRank {
    pub user_name: String,
    pub avg_score: f64,
}

fn format_date(at: time::OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    at.date()
        .format(&format)
        .unwrap_or_else(|_| at.date().to_string())
}

/// Join scores with their owners and games, keeping the input order.
async fn to_views<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    scores: Vec<Score>,
) -> Result<Vec<ScoreView>, AppError> {
    if scores.is_empty() {
        return Ok(Vec::new());
    }

    let user_ids: Vec<i64> = scores.iter().map(|s| s.user_id).collect();
    let game_ids: Vec<i64> = scores.iter().map(|s| s.game_id).collect();

    let names: HashMap<i64, String> = users_repo::find_by_ids(conn, user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect();
    let games: HashMap<i64, Game> = games_repo::find_by_ids(conn, game_ids)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
        .collect();

    scores
        .into_iter()
        .map(|score| {
            let game = games.get(&score.game_id).ok_or_else(|| {
                AppError::db(format!("score {} references a missing game", score.id))
            })?;
            let user_name = names.get(&score.user_id).cloned().ok_or_else(|| {
                AppError::db(format!("score {} references a missing user", score.id))
            })?;
            Ok(ScoreView {
                game_id: score.game_id,
                user_name,
                date: format_date(score.created_at),
                won: score.won,
                guess_count: score.guess_count,
                guesses_remaining: score.guesses_remaining,
                history: game
                    .state
                    .history
                    .letters()
                    .iter()
                    .map(char::to_string)
                    .collect(),
                norm_score: score.norm_score,
                word: game.state.target_word.clone(),
            })
        })
        .collect()
}

pub async fn get_scores(state: &AppState) -> Result<Vec<ScoreView>, AppError> {
    let db = require_db(state)?;
    let scores = scores_repo::list_all(db).await?;
    to_views(db, scores).await
}

pub async fn get_user_scores(state: &AppState, user_name: &str) -> Result<Vec<ScoreView>, AppError> {
    let db = require_db(state)?;
    let user = users_repo::require_by_name(db, user_name).await?;
    let scores = scores_repo::list_by_user(db, user.id).await?;
    to_views(db, scores).await
}

/// Best scores first. `None` returns every score.
pub async fn get_high_scores(
    state: &AppState,
    limit: Option<i64>,
) -> Result<Vec<ScoreView>, AppError> {
    let limit = match limit {
        None => None,
        Some(n) if n >= 1 && (n as u64) <= MAX_HIGH_SCORES => Some(n as u64),
        Some(n) => {
            return Err(DomainError::validation(
                ValidationKind::InvalidLimit,
                format!("limit must be between 1 and {MAX_HIGH_SCORES}, got {n}"),
            )
            .into())
        }
    };

    let db = require_db(state)?;
    let scores = scores_repo::list_top(db, limit).await?;
    to_views(db, scores).await
}

/// Mean normalized score per user, best first. Users without scores are omitted.
pub fn rank_users(names: &HashMap<i64, String>, scores: &[Score]) -> Vec<UserRank> {
    let mut totals: HashMap<i64, (f64, u32)> = HashMap::new();
    for score in scores {
        let entry = totals.entry(score.user_id).or_insert((0.0, 0));
        entry.0 += score.norm_score;
        entry.1 += 1;
    }

    let mut ranks: Vec<UserRank> = totals
        .into_iter()
        .filter_map(|(user_id, (sum, count))| {
            names.get(&user_id).map(|name| UserRank {
                user_name: name.clone(),
                avg_score: sum / f64::from(count),
            })
        })
        .collect();

    ranks.sort_by(|a, b| {
        b.avg_score
            .total_cmp(&a.avg_score)
            .then_with(|| b.user_name.cmp(&a.user_name))
    });
    ranks
}

pub async fn get_user_rankings(state: &AppState) -> Result<Vec<UserRank>, AppError> {
    let db = require_db(state)?;
    let names: HashMap<i64, String> = users_repo::list_all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect();
    let scores = scores_repo::list_all(db).await?;
    Ok(rank_users(&names, &scores))
}
