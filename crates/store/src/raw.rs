//! Raw query layer: SQL assembled from request input by string
//! concatenation, executed over a fresh connection per call.
//!
//! Every function in this module is an injection exhibit. The queries are
//! logged in full at info level, credentials included, which is the
//! logging-failures exhibit riding along.

use serde::Deserialize;
use sqlx::Connection;
use tracing::info;

use vulnapi_core::{Post, User};

use crate::db::raw_connection;
use crate::error::StoreResult;
use crate::users::UserRecord;

#[derive(Debug, sqlx::FromRow)]
struct PostRecord {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            user_id: value.user_id,
        }
    }
}

/// One record from an `/import/data` payload.
///
/// Deserialized without any schema validation and then concatenated
/// straight into an INSERT, role string and all.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportedUser {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

/// Credential check by string concatenation.
///
/// Builds `SELECT ... WHERE username = '{u}' AND password = '{p}'` from the
/// caller's input untouched, so `admin' --` as the username authenticates
/// without knowing any password. First matching row wins.
pub async fn find_user_matching_credentials(
    database_url: &str,
    username: &str,
    password: &str,
) -> StoreResult<Option<User>> {
    let sql = format!(
        "SELECT id, username, password, email, role FROM users \
         WHERE username = '{username}' AND password = '{password}'"
    );
    info!(query = %sql, "executing credential query");

    let mut conn = raw_connection(database_url).await?;
    let row = sqlx::query_as::<_, UserRecord>(&sql)
        .fetch_optional(&mut conn)
        .await?;
    conn.close().await?;

    Ok(row.map(User::from))
}

/// Post search by string concatenation.
///
/// `' OR 1=1 --` as the query collapses the WHERE clause and returns every
/// row in the table.
pub async fn search_posts(database_url: &str, query: &str) -> StoreResult<Vec<Post>> {
    let sql = format!(
        "SELECT id, title, content, user_id FROM posts \
         WHERE title LIKE '%{query}%' OR content LIKE '%{query}%'"
    );
    info!(query = %sql, "executing search query");

    let mut conn = raw_connection(database_url).await?;
    let rows = sqlx::query_as::<_, PostRecord>(&sql)
        .fetch_all(&mut conn)
        .await?;
    conn.close().await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

/// Overwrite any account's password, no questions asked.
///
/// There is no ownership or identity check anywhere on this path; the
/// username names the victim and that is all it takes. Returns the number
/// of rows touched.
pub async fn reset_password(
    database_url: &str,
    username: &str,
    new_password: &str,
) -> StoreResult<u64> {
    let sql =
        format!("UPDATE users SET password = '{new_password}' WHERE username = '{username}'");
    info!(query = %sql, "executing password reset");

    let mut conn = raw_connection(database_url).await?;
    let result = sqlx::query(&sql).execute(&mut conn).await?;
    conn.close().await?;

    Ok(result.rows_affected())
}

/// Insert imported users one concatenated INSERT at a time.
///
/// A single connection serves the whole batch; each failed statement aborts
/// the rest, and already-inserted rows stay (no transaction).
pub async fn import_users(database_url: &str, entries: &[ImportedUser]) -> StoreResult<usize> {
    let mut conn = raw_connection(database_url).await?;

    for entry in entries {
        let sql = format!(
            "INSERT INTO users (username, password, email, role) \
             VALUES ('{}', '{}', '{}', '{}')",
            entry.username, entry.password, entry.email, entry.role
        );
        info!(query = %sql, "executing import insert");
        sqlx::query(&sql).execute(&mut conn).await?;
    }

    conn.close().await?;
    Ok(entries.len())
}
