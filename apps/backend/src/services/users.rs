use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::users::{self as users_repo, User};

/// Registers a new user. Names are unique; a taken name is a
/// `USER_NAME_TAKEN` conflict raised by the unique index.
/// Returns the created user and the confirmation message.
pub async fn create_user(
    conn: &(impl ConnectionTrait + Send + Sync),
    name: &str,
    email: Option<&str>,
) -> Result<(User, String), AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Other("EMPTY_USER_NAME".into()),
            "User name must not be empty",
        )
        .into());
    }
    let email = email.map(str::trim).filter(|e| !e.is_empty());

    let user = users_repo::create_user(conn, name, email).await?;
    info!(user_id = user.id, "User created");

    let message = format!("User {} created!", user.name);
    Ok((user, message))
}
