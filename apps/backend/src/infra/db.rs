use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Open a pool for `profile`. Does NOT run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(db_url(profile)?);
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(5));

    if profile.is_in_memory() {
        // Every pooled connection would get its own empty database, so keep exactly one alive.
        let keep_alive = Duration::from_secs(24 * 60 * 60);
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(keep_alive)
            .max_lifetime(keep_alive);
    } else {
        opts.max_connections(10);
    }

    Ok(Database::connect(opts).await?)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(?profile, "database ready");
    Ok(conn)
}
