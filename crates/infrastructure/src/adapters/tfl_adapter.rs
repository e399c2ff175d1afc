//! TfL adapter - Implements TransitProviderPort using integration_tfl

use application::error::ApplicationError;
use application::ports::TransitProviderPort;
use async_trait::async_trait;
use domain::{Prediction, PredictionQuery, StopPointsResponse, StopQuery};
use integration_tfl::{StopPointClient, TflClient, TflConfig, TflError};
use tracing::{instrument, warn};

/// Adapter for the TfL Unified API
pub struct TflProviderAdapter {
    client: TflClient,
}

impl std::fmt::Debug for TflProviderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TflProviderAdapter")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl TflProviderAdapter {
    /// Name callers use to select this provider
    pub const PROVIDER_NAME: &'static str = "TflApi";

    /// Create a new TfL adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &TflConfig) -> Result<Self, ApplicationError> {
        let client = TflClient::new(config).map_err(map_error)?;
        Ok(Self::from_client(client))
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: TflClient) -> Self {
        Self { client }
    }
}

/// Convert a TfL client error into the gateway's error taxonomy
fn map_error(err: TflError) -> ApplicationError {
    match err {
        TflError::ConnectionFailed(_) | TflError::Timeout { .. } => {
            ApplicationError::UpstreamUnreachable(err.to_string())
        },
        TflError::UpstreamStatus { status } => ApplicationError::UpstreamStatus(status),
        TflError::ParseError(reason) => ApplicationError::UpstreamDecode(reason),
        TflError::ConfigurationError(reason) => ApplicationError::Configuration(reason),
    }
}

#[async_trait]
impl TransitProviderPort for TflProviderAdapter {
    #[instrument(skip(self, query))]
    async fn translate_stops(
        &self,
        query: &StopQuery,
    ) -> Result<StopPointsResponse, ApplicationError> {
        self.client.search_stops(query).await.map_err(|e| {
            warn!(error = %e, "TfL stop search failed");
            map_error(e)
        })
    }

    #[instrument(skip(self, query), fields(naptan_id = %query.naptan_id))]
    async fn translate_predictions(
        &self,
        query: &PredictionQuery,
    ) -> Result<Vec<Prediction>, ApplicationError> {
        self.client.arrivals(query).await.map_err(|e| {
            warn!(error = %e, "TfL arrivals lookup failed");
            map_error(e)
        })
    }
}
