//! TfL Unified API client
//!
//! [`UpstreamClient`] performs exactly one GET per call: no retries, no backoff.
//! [`TflClient`] builds the upstream request for each gateway operation and
//! normalizes what comes back.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Prediction, PredictionQuery, StopPointsResponse, StopQuery};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::TflConfig;
use crate::error::TflError;
use crate::predictions::PredictionsTranslator;
use crate::stops::{STOP_POINT_SEGMENT, StopsTranslator};

/// Result of a single upstream call
///
/// `Ok` carries the decoded body of a 200 response. `Err` is one of a transport
/// failure, a non-200 status, or a 200 whose body is not JSON.
pub type UpstreamOutcome = Result<Value, TflError>;

/// Thin HTTP GET primitive shared by both translators
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    timeout_secs: u64,
}

impl UpstreamClient {
    /// Create a new upstream client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &TflConfig) -> Result<Self, TflError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TflError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Perform a GET and decode a 200 body as JSON
    #[instrument(skip(self, url, params), fields(url = %url))]
    pub async fn get(&self, url: Url, params: &[(&str, String)]) -> UpstreamOutcome {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "TfL request failed");
                if e.is_timeout() {
                    TflError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    TflError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            info!(status = status.as_u16(), "TfL request failed with status");
            return Err(TflError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read TfL response body");
            TflError::ParseError(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "TfL response is not valid JSON");
            TflError::ParseError(e.to_string())
        })
    }
}

/// Operations the gateway needs from a stop-point API
#[async_trait]
pub trait StopPointClient: Send + Sync {
    /// Find stops around a location
    async fn search_stops(&self, query: &StopQuery) -> Result<StopPointsResponse, TflError>;

    /// Fetch bus arrival predictions for a stop
    async fn arrivals(&self, query: &PredictionQuery) -> Result<Vec<Prediction>, TflError>;
}

/// Client for the TfL Unified API
#[derive(Debug, Clone)]
pub struct TflClient {
    upstream: UpstreamClient,
    config: TflConfig,
}

impl TflClient {
    /// Create a new TfL client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TflConfig) -> Result<Self, TflError> {
        config.validate().map_err(TflError::ConfigurationError)?;

        Ok(Self {
            upstream: UpstreamClient::new(config)?,
            config: config.clone(),
        })
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &TflConfig {
        &self.config
    }
}

#[async_trait]
impl StopPointClient for TflClient {
    #[instrument(skip(self, query))]
    async fn search_stops(&self, query: &StopQuery) -> Result<StopPointsResponse, TflError> {
        let url = self.config.endpoint(&[STOP_POINT_SEGMENT])?;
        let params = StopsTranslator::params(query);

        debug!(?params, "Searching stops");

        let body = self.upstream.get(url, &params).await?;
        let response = StopsTranslator::normalize(&body)?;

        debug!(count = response.len(), "Stops found");
        Ok(response)
    }

    #[instrument(skip(self, query), fields(naptan_id = %query.naptan_id))]
    async fn arrivals(&self, query: &PredictionQuery) -> Result<Vec<Prediction>, TflError> {
        let url = PredictionsTranslator::url(&self.config, query)?;

        debug!("Fetching arrivals");

        let body = self
            .upstream
            .get(url, &PredictionsTranslator::params())
            .await?;
        let predictions = PredictionsTranslator::normalize(body)?;

        debug!(count = predictions.len(), "Arrivals found");
        Ok(predictions)
    }
}
