use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use vulnapi_store::raw::{self, ImportedUser};

use crate::app::dto::ImportParams;
use crate::app::services::AppServices;

/// `POST /import/data?data=` — software and data integrity failures (A08).
///
/// The `data` parameter is parsed as JSON with no schema and no
/// validation; each entry under `"users"` is then inserted via the raw
/// concatenated INSERT. Every failure mode answers 200 with the raw error
/// text in the body.
pub async fn import_data(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<ImportParams>,
) -> axum::response::Response {
    let parsed: serde_json::Value = match serde_json::from_str(&params.data) {
        Ok(value) => value,
        Err(e) => return error_body(e.to_string()),
    };

    let entries: Vec<ImportedUser> = match parsed.get("users") {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(entries) => entries,
            Err(e) => return error_body(e.to_string()),
        },
        None => Vec::new(),
    };

    match raw::import_users(&services.config.database_url, &entries).await {
        Ok(items) => (
            StatusCode::OK,
            Json(json!({
                "message": "Data imported successfully",
                "items": items,
            })),
        )
            .into_response(),
        Err(e) => error_body(e.to_string()),
    }
}

fn error_body(message: String) -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "error": message }))).into_response()
}
