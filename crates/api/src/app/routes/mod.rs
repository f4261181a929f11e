use axum::{
    Router,
    routing::{get, post},
};

pub mod admin;
pub mod authn;
pub mod common;
pub mod debug;
pub mod fetch;
pub mod home;
pub mod import;
pub mod posts;
pub mod system;
pub mod users;

/// Router for the full demo surface, one route per exhibit.
///
/// There is no protective middleware by design; the handlers that check
/// credentials do so inline.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/admin/users/", get(admin::list_users))
        .route("/login", post(authn::login))
        .route("/posts/search/", get(posts::search))
        .route("/password/reset", post(users::reset_password))
        .route("/debug/config", get(debug::config))
        .route("/system/check", get(system::check))
        .route("/register", post(users::register))
        .route("/import/data", post(import::import_data))
        .route("/users/:id", get(users::get_user))
        .route("/fetch-resource/", get(fetch::fetch_resource))
}
