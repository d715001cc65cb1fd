use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::handlers::{auth, movies};
use crate::services::MovieService;

/// Shared handler state; the movie service is built once at startup and
/// cloned into every handler instead of being re-created per call.
#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
}

pub fn app(state: AppState) -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .merge(movie_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config::config().server.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Movie routes. Auth policy lives here: listing takes an `AuthUser` and is
/// the only gated operation; existing clients depend on the rest staying
/// open.
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(movies::movie_list).post(movies::movie_create),
        )
        // Trailing slash is its own route: category filtering
        .route("/movies/", get(movies::movie_by_category))
        .route(
            "/movies/:id",
            get(movies::movie_get)
                .put(movies::movie_update)
                .delete(movies::movie_delete),
        )
}

async fn root() -> Json<Value> {
    Json(json!({ "name": "movie-api", "movies": "/movies" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
