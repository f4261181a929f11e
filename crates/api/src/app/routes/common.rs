use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode, header};

use vulnapi_auth::{BasicCredentials, parse_basic_header};
use vulnapi_core::User;
use vulnapi_store::raw;

use crate::app::errors::{json_error, store_error_to_response};
use crate::app::services::AppServices;

/// Pull Basic credentials out of the Authorization header, or produce the
/// 401 the caller should return.
pub fn extract_basic(headers: &HeaderMap) -> Result<BasicCredentials, axum::response::Response> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(unauthorized)?;

    parse_basic_header(header).map_err(|e| {
        tracing::warn!("basic auth rejected: {e}");
        unauthorized()
    })
}

/// Credential check shared by the endpoints that take Basic auth.
///
/// Runs the concatenated SELECT from the store's raw layer, so it inherits
/// that layer's injection behavior: this is the front door the
/// `admin' --` payload walks through.
pub async fn verify_user(
    services: &Arc<AppServices>,
    headers: &HeaderMap,
) -> Result<User, axum::response::Response> {
    let creds = extract_basic(headers)?;

    match raw::find_user_matching_credentials(
        &services.config.database_url,
        &creds.username,
        &creds.password,
    )
    .await
    {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(unauthorized()),
        Err(e) => Err(store_error_to_response(e)),
    }
}

pub fn unauthorized() -> axum::response::Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        "invalid_credentials",
        "Invalid credentials",
    )
}
