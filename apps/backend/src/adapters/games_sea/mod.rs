//! SeaORM adapter for game repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameProgressUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Distinguish a stale lock version from a vanished row after a guarded write hit nothing.
async fn lock_failure<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    expected_lock_version: i32,
) -> sea_orm::DbErr {
    match games::Entity::find_by_id(id).one(conn).await {
        Ok(Some(game)) => sea_orm::DbErr::Custom(format!(
            "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
            expected_lock_version, game.lock_version
        )),
        Ok(None) => sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}")),
        Err(e) => e,
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn find_open_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::UserId.eq(user_id))
        .filter(games::Column::GameOver.eq(false))
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn find_all_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::GameOver.eq(false))
        .all(conn)
        .await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.is_in(ids))
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    games::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        target_word: Set(dto.target_word),
        attempts_count: Set(0),
        attempts_progress: Set(dto.attempts_progress),
        attempts_limit: Set(dto.attempts_limit),
        game_over: Set(false),
        history: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
        lock_version: Set(1),
    }
    .insert(conn)
    .await
}

/// Compare-and-swap on `(id, lock_version)`, bumping the version; returns the fresh row.
pub async fn update_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameProgressUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::AttemptsCount, Expr::value(dto.attempts_count))
        .col_expr(
            games::Column::AttemptsProgress,
            Expr::value(dto.attempts_progress),
        )
        .col_expr(games::Column::GameOver, Expr::value(dto.game_over))
        .col_expr(games::Column::History, Expr::value(dto.history))
        .col_expr(
            games::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::LockVersion.eq(dto.expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(lock_failure(conn, dto.id, dto.expected_lock_version).await);
    }

    games::Entity::find_by_id(dto.id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{}", dto.id)))
}

/// Delete an unfinished game, guarded by lock version.
pub async fn delete_open_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    expected_lock_version: i32,
) -> Result<(), sea_orm::DbErr> {
    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(expected_lock_version))
        .filter(games::Column::GameOver.eq(false))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(lock_failure(conn, id, expected_lock_version).await);
    }
    Ok(())
}
