//! Score repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::scores_sea as scores_adapter;
use crate::domain::ScoreOutcome;
use crate::entities::scores;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub id: i64,
    pub user_id: i64,
    pub game_id: i64,
    pub won: bool,
    pub guess_count: i32,
    pub guesses_remaining: i32,
    pub norm_score: f64,
    pub created_at: time::OffsetDateTime,
}

impl From<scores::Model> for Score {
    fn from(model: scores::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            game_id: model.game_id,
            won: model.won,
            guess_count: model.guess_count,
            guesses_remaining: model.guesses_remaining,
            norm_score: model.norm_score,
            created_at: model.created_at,
        }
    }
}

pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    outcome: &ScoreOutcome,
) -> Result<Score, DomainError> {
    let dto = scores_adapter::ScoreCreate {
        user_id,
        game_id,
        won: outcome.won,
        guess_count: outcome.guess_count,
        guesses_remaining: outcome.guesses_remaining,
        norm_score: outcome.norm_score,
    };
    Ok(Score::from(scores_adapter::create_score(conn, dto).await?))
}

pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Score>, DomainError> {
    Ok(scores_adapter::find_by_game(conn, game_id).await?.map(Score::from))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Score>, DomainError> {
    let rows = scores_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Score::from).collect())
}

pub async fn list_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Score>, DomainError> {
    let rows = scores_adapter::list_by_user(conn, user_id).await?;
    Ok(rows.into_iter().map(Score::from).collect())
}

pub async fn list_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<Score>, DomainError> {
    let rows = scores_adapter::list_top(conn, limit).await?;
    Ok(rows.into_iter().map(Score::from).collect())
}
