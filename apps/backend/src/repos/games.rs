//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::domain::{GameState, GuessHistory};
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};

pub const MSG_GAME_NOT_FOUND: &str = "Game not found!";

/// Persisted game: the pure state plus row identity and lock version.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub user_id: i64,
    pub state: GameState,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub lock_version: i32,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            state: GameState {
                target_word: model.target_word,
                attempts_count: model.attempts_count,
                attempts_progress: model.attempts_progress,
                attempts_limit: model.attempts_limit,
                game_over: model.game_over,
                history: GuessHistory::from_stored(&model.history),
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
            lock_version: model.lock_version,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    Ok(games_adapter::find_by_id(conn, game_id).await?.map(Game::from))
}

pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, MSG_GAME_NOT_FOUND))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    state: &GameState,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate {
        user_id,
        target_word: state.target_word.clone(),
        attempts_progress: state.attempts_progress,
        attempts_limit: state.attempts_limit,
    };
    Ok(Game::from(games_adapter::create_game(conn, dto).await?))
}

/// Write back a game after a guess, guarded by the lock version it was read at.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
    state: &GameState,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameProgressUpdate {
        id: game_id,
        attempts_count: state.attempts_count,
        attempts_progress: state.attempts_progress,
        game_over: state.game_over,
        history: state.history.to_stored(),
        expected_lock_version,
    };
    Ok(Game::from(games_adapter::update_progress(conn, dto).await?))
}

pub async fn delete_open_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
) -> Result<(), DomainError> {
    games_adapter::delete_open_game(conn, game_id, expected_lock_version).await?;
    Ok(())
}

pub async fn list_open_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::find_open_by_user(conn, user_id).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

pub async fn list_all_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::find_all_open(conn).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::find_by_ids(conn, ids).await?;
    Ok(games.into_iter().map(Game::from).collect())
}
