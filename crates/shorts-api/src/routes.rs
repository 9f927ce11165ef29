//! API routes.

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{generate, health, ping};
use crate::middleware::{cors_layer, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .route("/ping", get(ping))
        .route("/generate", post(generate))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(axum::middleware::from_fn(request_logging))
        .layer(cors)
        .with_state(state)
}
