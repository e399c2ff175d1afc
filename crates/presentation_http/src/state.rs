//! Application state shared across handlers

use std::sync::Arc;

use application::GatewayService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway use cases backed by the registered providers
    pub gateway: Arc<GatewayService>,
}

impl AppState {
    /// Create state around a gateway service
    #[must_use]
    pub fn new(gateway: GatewayService) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
