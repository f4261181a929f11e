use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use vulnapi_store::{raw, users};

use crate::app::dto::{RegisterParams, ResetPasswordParams, UserDetail};
use crate::app::errors::{json_error, store_error_to_response};
use crate::app::services::AppServices;

/// `POST /password/reset?username=&new_password=` — insecure design (A04).
///
/// No authentication, no ownership proof, no token: whoever names an
/// account picks its next password. The UPDATE underneath is concatenated
/// too, so it is injectable on top of being unguarded.
pub async fn reset_password(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<ResetPasswordParams>,
) -> axum::response::Response {
    match raw::reset_password(
        &services.config.database_url,
        &params.username,
        &params.new_password,
    )
    .await
    {
        Ok(_touched) => (
            StatusCode::OK,
            Json(json!({
                "message": format!("Password for {} has been reset", params.username),
            })),
        )
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

/// `POST /register?username=&password=&email=` — plaintext credential
/// storage (A02, A07).
///
/// No password complexity rules, no email validation. The insert itself is
/// parameterized; the flaw is what gets stored.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<RegisterParams>,
) -> axum::response::Response {
    match users::find_by_username(&services.pool, &params.username).await {
        Ok(Some(_)) => {
            return json_error(
                StatusCode::BAD_REQUEST,
                "duplicate_username",
                "Username already exists",
            );
        }
        Ok(None) => {}
        Err(e) => return store_error_to_response(e),
    }

    match users::insert(
        &services.pool,
        &params.username,
        &params.password,
        &params.email,
    )
    .await
    {
        Ok(user_id) => (
            StatusCode::OK,
            Json(json!({
                "message": "User created successfully",
                "user_id": user_id,
            })),
        )
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

/// `GET /users/{id}` — logging and monitoring failures (A09).
///
/// No authentication, no audit trail, and the response carries the full
/// row including the plaintext password. A missing user still answers 200,
/// so enumeration never shows up as an error anywhere.
pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(user_id): Path<i64>,
) -> axum::response::Response {
    match users::find_by_id(&services.pool, user_id).await {
        Ok(Some(user)) => (StatusCode::OK, Json(UserDetail::from(user))).into_response(),
        Ok(None) => (
            StatusCode::OK,
            Json(json!({
                "error": format!("User with ID {user_id} not found"),
            })),
        )
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}
