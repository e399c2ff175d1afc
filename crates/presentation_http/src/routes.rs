//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Gateway API
        .route("/stops", post(handlers::gateway::stops))
        .route("/predictions", post(handlers::gateway::predictions))
        // Attach state
        .with_state(state)
        .layer(RequestIdLayer::new())
}
