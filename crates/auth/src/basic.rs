//! HTTP Basic credential parsing.
//!
//! Basic auth over plain HTTP is itself one of the authentication-failure
//! exhibits; this module just decodes the header faithfully.

use base64::Engine;
use thiserror::Error;

/// Credentials decoded from an `Authorization: Basic` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("malformed Basic authorization header")]
    Malformed,

    #[error("empty username or password")]
    Empty,
}

/// Parse the value of an `Authorization` header into Basic credentials.
///
/// Empty usernames or passwords are rejected here; that is the only
/// validation the demo performs on credentials. What happens to them
/// afterwards (concatenation into SQL text) is the store layer's exhibit.
pub fn parse_basic_header(header: &str) -> Result<BasicCredentials, CredentialError> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or(CredentialError::Malformed)?
        .trim();

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| CredentialError::Malformed)?;
    let decoded = String::from_utf8(decoded).map_err(|_| CredentialError::Malformed)?;

    let (username, password) = decoded.split_once(':').ok_or(CredentialError::Malformed)?;
    if username.is_empty() || password.is_empty() {
        tracing::warn!("empty username or password provided");
        return Err(CredentialError::Empty);
    }

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
