//! The two persisted records.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A registered account.
///
/// The password field holds the password exactly as the caller supplied it.
/// No hashing, no salting; several endpoints echo it back to the network.
/// That is the cryptographic-failures exhibit, not an oversight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
}

/// A blog post, loosely linked to its author.
///
/// `user_id` carries no foreign-key constraint; rows can reference users
/// that never existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}
