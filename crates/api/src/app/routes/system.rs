use axum::{Json, extract::Query, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::info;

use crate::app::dto::SystemCheckParams;
use crate::app::errors::json_error;

const DEFAULT_COMMAND: &str = "echo 'System check running'";

/// `GET /system/check?command=` — command injection (A06).
///
/// The command parameter goes to `sh -c` as-is, so `;` and `&&` chain
/// arbitrary programs. Combined stdout/stderr text is echoed back to the
/// caller either way.
pub async fn check(Query(params): Query<SystemCheckParams>) -> axum::response::Response {
    let command = params
        .command
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

    info!(%command, "running system check");

    let output = match tokio::process::Command::new("sh")
        .arg("-c")
        .arg(&command)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "spawn_error", e.to_string());
        }
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        (StatusCode::OK, Json(json!({ "output": text }))).into_response()
    } else {
        (StatusCode::OK, Json(json!({ "error": text }))).into_response()
    }
}
