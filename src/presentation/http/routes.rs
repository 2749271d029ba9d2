//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{security_headers, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Security headers apply to every response; metrics recording wraps
        // the whole stack so rejections are counted too.
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/entries", entry_routes())
}

/// User routes: registration, authentication, balance
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::user::register))
        .route("/authenticate", post(handlers::user::authenticate))
        .route("/{id}/balance", get(handlers::user::balance))
}

/// Entry routes: create, search, update, status change, delete
fn entry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::entry::create).get(handlers::entry::search),
        )
        .route(
            "/{id}",
            put(handlers::entry::update).delete(handlers::entry::remove),
        )
        .route("/{id}/status", put(handlers::entry::update_status))
}
