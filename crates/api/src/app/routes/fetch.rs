use axum::{Json, extract::Query, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::app::dto::FetchParams;

/// Responses are clipped to this many characters before echoing.
const CONTENT_PREVIEW_CHARS: usize = 500;

/// `GET /fetch-resource/?url=` — server-side request forgery (A10).
///
/// The URL is fetched exactly as supplied. Loopback addresses, internal
/// services, and cloud metadata endpoints are all fair game; the first 500
/// characters of whatever answers come back to the caller.
pub async fn fetch_resource(Query(params): Query<FetchParams>) -> axum::response::Response {
    let response = match reqwest::get(&params.url).await {
        Ok(response) => response,
        Err(e) => return error_body(e.to_string()),
    };

    let status = response.status().as_u16();
    let content = match response.text().await {
        Ok(content) => content,
        Err(e) => return error_body(e.to_string()),
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": status,
            "content": preview(&content),
        })),
    )
        .into_response()
}

fn preview(content: &str) -> String {
    if content.chars().count() <= CONTENT_PREVIEW_CHARS {
        return content.to_string();
    }
    let mut clipped: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
    clipped.push_str("...");
    clipped
}

fn error_body(message: String) -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_clips_long_bodies() {
        let long = "x".repeat(600);
        let clipped = preview(&long);
        assert_eq!(clipped.chars().count(), CONTENT_PREVIEW_CHARS + 3);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn preview_leaves_short_bodies_alone() {
        assert_eq!(preview("hello"), "hello");
    }
}
