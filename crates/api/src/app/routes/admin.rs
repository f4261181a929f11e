use std::sync::Arc;

use axum::{Json, extract::Extension, http::HeaderMap, http::StatusCode, response::IntoResponse};

use vulnapi_store::users;

use crate::app::dto::UserSummary;
use crate::app::errors::store_error_to_response;
use crate::app::routes::common;
use crate::app::services::AppServices;

/// `GET /admin/users/` — broken access control (A01).
///
/// Credentials are verified, but the role never is: any authenticated
/// account, freshly self-registered ones included, can enumerate every
/// user in the system.
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let _user = match common::verify_user(&services, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match users::list_all(&services.pool).await {
        Ok(all) => {
            let body: Vec<UserSummary> = all.iter().map(UserSummary::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => store_error_to_response(e),
    }
}
