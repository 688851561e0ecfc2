use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{generate_response, root, test_generate};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Liveness
        .route("/", get(root))

        // Assistant API
        .route("/api/generate_response", post(generate_response))
        .route("/api/test", get(test_generate))
}

/// Full application router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
