//! Gateway service
//!
//! Entry point of the two gateway use cases. Validates the caller's body,
//! picks the provider, and hands the typed query to it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use domain::{Prediction, RequestValidator, StopPointsResponse};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::TransitProviderPort;

/// Dispatches stop and prediction requests to a named transit provider
///
/// Providers are selected by the optional `application.apiName` field of the
/// request body, falling back to the configured default provider.
#[derive(Clone)]
pub struct GatewayService {
    providers: HashMap<String, Arc<dyn TransitProviderPort>>,
    default_provider: String,
}

impl fmt::Debug for GatewayService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayService")
            .field("providers", &self.provider_names())
            .field("default_provider", &self.default_provider)
            .finish()
    }
}

impl GatewayService {
    /// Create a service with no providers registered yet
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider under a name, replacing any previous registration
    #[must_use]
    pub fn with_provider(
        mut self,
        name: impl Into<String>,
        provider: Arc<dyn TransitProviderPort>,
    ) -> Self {
        self.providers.insert(name.into(), provider);
        self
    }

    /// Name of the provider used when a request does not ask for one
    #[must_use]
    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }

    /// Names of all registered providers, sorted
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether the default provider is registered
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.providers.contains_key(&self.default_provider)
    }

    fn select(&self, body: &Value) -> Result<&Arc<dyn TransitProviderPort>, ApplicationError> {
        let name = RequestValidator::requested_provider(body)?
            .unwrap_or(self.default_provider.as_str());
        self.providers.get(name).ok_or_else(|| {
            warn!(provider = %name, "No provider registered under requested name");
            ApplicationError::UnknownProvider(name.to_string())
        })
    }

    /// Handle a stop search body
    #[instrument(skip_all)]
    pub async fn stops(&self, body: &Value) -> Result<StopPointsResponse, ApplicationError> {
        let query = RequestValidator::validate_stops(body).inspect_err(|e| {
            debug!(error = %e, "Rejected stop search");
        })?;
        let provider = self.select(body)?;

        provider.translate_stops(&query).await
    }

    /// Handle a predictions body
    #[instrument(skip_all)]
    pub async fn predictions(&self, body: &Value) -> Result<Vec<Prediction>, ApplicationError> {
        let query = RequestValidator::validate_predictions(body).inspect_err(|e| {
            debug!(error = %e, "Rejected predictions request");
        })?;
        let provider = self.select(body)?;

        provider.translate_predictions(&query).await
    }
}
