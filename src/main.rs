use std::sync::Arc;

use movie_api::config;
use movie_api::routes::{app, AppState};
use movie_api::services::MovieService;
use movie_api::store::MemoryStore;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    let config = config::config();

    let default_filter = if config.server.enable_request_logging {
        "movie_api=debug,tower_http=debug"
    } else {
        "movie_api=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    tracing::info!("Starting movie API in {:?} mode", config.environment);

    // The storage collaborator is built once and injected; handlers share it
    let service = MovieService::new(Arc::new(MemoryStore::seeded()));
    let app = app(AppState { movies: service });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Movie API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
