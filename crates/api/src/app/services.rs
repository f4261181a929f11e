//! Shared application services: configuration + database pool.

use sqlx::SqlitePool;

use vulnapi_core::AppConfig;
use vulnapi_store::schema;

/// State shared by every handler via `Extension<Arc<AppServices>>`.
///
/// The pool backs the parameterized query layer; the raw layer ignores it
/// and dials the `database_url` directly, one connection per call.
pub struct AppServices {
    pub config: AppConfig,
    pub pool: SqlitePool,
}

/// Connect, create the schema, and seed the well-known test data.
pub async fn build_services(config: AppConfig) -> anyhow::Result<AppServices> {
    let pool = vulnapi_store::connect_pool(&config.database_url).await?;
    schema::bootstrap(&pool).await?;
    schema::seed_if_empty(&pool).await?;

    Ok(AppServices { config, pool })
}
