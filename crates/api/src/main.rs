#[tokio::main]
async fn main() {
    vulnapi_observability::init();

    tracing::warn!(
        "this application contains intentional security vulnerabilities; use for education only"
    );

    let config = vulnapi_core::AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    let app = vulnapi_api::app::build_app(config)
        .await
        .expect("failed to build app");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
