//! User repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

pub const MSG_USER_NOT_FOUND: &str = "A User with that name does not exist!";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: time::OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<User>, DomainError> {
    Ok(users_adapter::find_by_name(conn, name).await?.map(User::from))
}

/// Look up a user by name; unknown names are `NotFound(User)`.
pub async fn require_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<User, DomainError> {
    find_by_name(conn, name)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, MSG_USER_NOT_FOUND))
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::find_by_ids(conn, ids).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_all(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

/// Insert a user. A taken name maps to `Conflict(UserNameTaken)` via the unique index.
pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: Option<&str>,
) -> Result<User, DomainError> {
    let mut dto = users_adapter::UserCreate::new(name);
    if let Some(email) = email {
        dto = dto.with_email(email);
    }
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}
