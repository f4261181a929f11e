//! Parameterized user queries (the "ORM-style" path).
//!
//! These queries bind their inputs properly. The flaw they demonstrate is
//! what gets stored and returned (verbatim passwords), not how the SQL is
//! assembled.

use sqlx::SqlitePool;

use vulnapi_core::{Role, User};

use crate::error::{StoreError, StoreResult};

/// Row shape shared with the raw layer.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            username: value.username,
            password: value.password,
            email: value.email,
            role: Role::new(value.role),
        }
    }
}

pub async fn count(pool: &SqlitePool) -> StoreResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Every account, in id order. Callers decide who may see this; the admin
/// endpoint deliberately does not.
pub async fn list_all(pool: &SqlitePool) -> StoreResult<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRecord>(
        "SELECT id, username, password, email, role FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT id, username, password, email, role FROM users WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(User::from))
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> StoreResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT id, username, password, email, role FROM users WHERE username = ?1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(User::from))
}

/// Insert a new account with the default "user" role, returning its id.
///
/// The password is stored exactly as given. No complexity rules, no email
/// validation; the only thing that can fail is the uniqueness constraint.
pub async fn insert(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    email: &str,
) -> StoreResult<i64> {
    let result =
        sqlx::query("INSERT INTO users (username, password, email, role) VALUES (?1, ?2, ?3, ?4)")
            .bind(username)
            .bind(password)
            .bind(email)
            .bind(Role::user().as_str())
            .execute(pool)
            .await
            .map_err(|e| {
                if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                    StoreError::DuplicateUsername
                } else {
                    StoreError::Database(e)
                }
            })?;

    Ok(result.last_insert_rowid())
}
