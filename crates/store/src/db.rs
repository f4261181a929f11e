//! Connection handling.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, SqliteConnection, SqlitePool};

use crate::error::StoreResult;

/// Open the shared pool used by the parameterized query layer.
///
/// The database file is created on first use, in whatever directory the
/// URL points at, with default permissions.
pub async fn connect_pool(database_url: &str) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Open a fresh single-use connection for the raw query layer.
///
/// No pooling policy: one connection per call, opened and closed around a
/// single statement, exactly as the demo intends.
pub async fn raw_connection(database_url: &str) -> StoreResult<SqliteConnection> {
    let options = SqliteConnectOptions::from_str(database_url)?;
    Ok(SqliteConnection::connect_with(&options).await?)
}
