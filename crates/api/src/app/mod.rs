//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared state (configuration + SQLite pool) and startup
//! - `routes/`: HTTP routes + handlers (one file per exhibit area)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;

use vulnapi_core::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// Nothing here is gated by middleware: the endpoints that check
/// credentials do so themselves, and most deliberately do not.
pub async fn build_app(config: AppConfig) -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services(config).await?);

    // Wide-open CORS: any origin mirrored back, all methods and headers,
    // credentials allowed. Companion piece to the /debug/config exhibit.
    Ok(routes::router()
        .layer(Extension(services))
        .layer(CorsLayer::very_permissive()))
}
