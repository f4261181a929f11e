//! HS256 token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use vulnapi_core::Role;

use crate::claims::JwtClaims;

/// Tokens expire one hour after issue.
pub const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Decode(#[source] jsonwebtoken::errors::Error),
}

/// Mint an HS256 token for an authenticated user.
///
/// The secret comes from the caller's configuration, which defaults to a
/// value published in the source tree.
pub fn issue(secret: &str, username: &str, role: &Role) -> Result<String, TokenError> {
    let claims = JwtClaims {
        sub: username.to_string(),
        role: role.as_str().to_string(),
        exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Decode and validate a token, returning its claims.
pub fn verify(secret: &str, token: &str) -> Result<JwtClaims, TokenError> {
    decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(TokenError::Decode)
}
