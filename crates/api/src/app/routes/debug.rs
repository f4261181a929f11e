use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};
use serde_json::json;

use crate::app::services::AppServices;

/// `GET /debug/config` — security misconfiguration (A05).
///
/// Unauthenticated dump of the runtime configuration: database URL, the
/// JWT signing secret, and the entire process environment.
pub async fn config(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let environment: BTreeMap<String, String> = std::env::vars().collect();

    Json(json!({
        "app_name": services.config.app_name,
        "database_url": services.config.database_url,
        "jwt_secret": services.config.jwt_secret,
        "environment": environment,
        "debug_mode": services.config.debug_mode,
    }))
}
