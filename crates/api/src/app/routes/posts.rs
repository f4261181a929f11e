use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use vulnapi_store::raw;

use crate::app::dto::{PostBody, SearchParams};
use crate::app::errors::store_error_to_response;
use crate::app::services::AppServices;

/// `GET /posts/search/?query=` — SQL injection (A03).
///
/// The query string is pasted into a LIKE clause by the raw store layer.
/// `' OR 1=1 --` returns the whole table.
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SearchParams>,
) -> axum::response::Response {
    match raw::search_posts(&services.config.database_url, &params.query).await {
        Ok(found) => {
            let body: Vec<PostBody> = found.into_iter().map(PostBody::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => store_error_to_response(e),
    }
}
