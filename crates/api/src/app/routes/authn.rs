use std::sync::Arc;

use axum::{Json, extract::Extension, http::HeaderMap, http::StatusCode, response::IntoResponse};

use crate::app::dto::LoginResponse;
use crate::app::errors::json_error;
use crate::app::routes::common;
use crate::app::services::AppServices;

/// `POST /login` — authentication and cryptographic failures (A02, A07).
///
/// Basic auth over plain HTTP, verified against plaintext passwords by the
/// raw (injectable) credential query, then answered with an HS256 token
/// signed by a secret that `/debug/config` happily discloses.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let user = match common::verify_user(&services, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match vulnapi_auth::issue(&services.config.jwt_secret, &user.username, &user.role) {
        Ok(token) => (
            StatusCode::OK,
            Json(LoginResponse {
                access_token: token,
                token_type: "bearer".to_string(),
            }),
        )
            .into_response(),
        Err(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "token_error",
            e.to_string(),
        ),
    }
}
