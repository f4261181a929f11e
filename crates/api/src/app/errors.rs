use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vulnapi_store::StoreError;

/// Map a store error onto an HTTP response.
///
/// Driver error text goes back to the caller verbatim. That is the
/// information-disclosure exhibit, not sloppiness to fix.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::DuplicateUsername => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_username",
            "Username already exists",
        ),
        StoreError::Database(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            e.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
