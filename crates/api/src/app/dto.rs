use serde::{Deserialize, Serialize};

use vulnapi_core::{Post, User};

// -------------------------
// Request DTOs (query-string parameters, as in the original surface)
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordParams {
    pub username: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SystemCheckParams {
    pub command: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImportParams {
    /// A JSON document as a string, parsed without any schema.
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct FetchParams {
    pub url: String,
}

// -------------------------
// Response DTOs
// -------------------------

/// User listing row: no password, but served to any authenticated caller
/// regardless of role.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}

/// Full user row, password included. Served unauthenticated by
/// `GET /users/{id}`.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserDetail {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostBody {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

impl From<Post> for PostBody {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}
