//! Schema bootstrap and seed data.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;
use crate::users;

/// Create the two tables if they do not exist yet.
///
/// `users.username` carries the only constraint in the schema. `posts.user_id`
/// is a bare integer: no foreign key, no referential integrity.
pub async fn bootstrap(pool: &SqlitePool) -> StoreResult<()> {
    info!("bootstrapping schema");

    let ddls = [
        r#"
        CREATE TABLE IF NOT EXISTS users(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE,
            password TEXT,
            email TEXT,
            role TEXT DEFAULT 'user'
        )"#,
        r#"
        CREATE TABLE IF NOT EXISTS posts(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            content TEXT,
            user_id INTEGER
        )"#,
    ];

    for ddl in ddls {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}

/// Insert the well-known test accounts and posts if the database is empty.
///
/// The seed passwords are weak and stored verbatim; they are the documented
/// way into the demo (`admin/admin123`, `user1/password123`).
pub async fn seed_if_empty(pool: &SqlitePool) -> StoreResult<()> {
    if users::count(pool).await? > 0 {
        return Ok(());
    }

    info!("seeding test data");

    let seed_users = [
        ("admin", "admin123", "admin@example.com", "admin"),
        ("user1", "password123", "user1@example.com", "user"),
    ];
    for (username, password, email, role) in seed_users {
        sqlx::query("INSERT INTO users (username, password, email, role) VALUES (?1, ?2, ?3, ?4)")
            .bind(username)
            .bind(password)
            .bind(email)
            .bind(role)
            .execute(pool)
            .await?;
    }

    let seed_posts = [
        ("Welcome", "Welcome to our vulnerable app!", 1i64),
        ("Security is important", "This app shows how NOT to do things", 1i64),
    ];
    for (title, content, user_id) in seed_posts {
        sqlx::query("INSERT INTO posts (title, content, user_id) VALUES (?1, ?2, ?3)")
            .bind(title)
            .bind(content)
            .bind(user_id)
            .execute(pool)
            .await?;
    }

    Ok(())
}
