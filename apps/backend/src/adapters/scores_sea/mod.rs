//! SeaORM adapter for score repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::scores;

pub mod dto;

pub use dto::ScoreCreate;

pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreCreate,
) -> Result<scores::Model, sea_orm::DbErr> {
    scores::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        game_id: Set(dto.game_id),
        won: Set(dto.won),
        guess_count: Set(dto.guess_count),
        guesses_remaining: Set(dto.guesses_remaining),
        norm_score: Set(dto.norm_score),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::UserId.eq(user_id))
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

/// Highest normalized scores first; ties keep insertion order.
pub async fn list_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .order_by_desc(scores::Column::NormScore)
        .order_by_asc(scores::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}
