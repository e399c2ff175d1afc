//! Transit gateway HTTP presentation layer
//!
//! This crate provides the HTTP API of the transit gateway: the `/stops` and
//! `/predictions` endpoints plus liveness and readiness probes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
