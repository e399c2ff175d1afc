//! Transit provider port
//!
//! Defines the capability interface of an upstream transit-data provider.
//! Each adapter translates the gateway's typed queries into its own upstream
//! contract and normalizes the upstream records on the way back.

use async_trait::async_trait;
use domain::{Prediction, PredictionQuery, StopPointsResponse, StopQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for upstream transit-data providers
///
/// Implementations perform exactly one upstream call per invocation and never
/// retry. All upstream failures are reported as an `ApplicationError`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitProviderPort: Send + Sync {
    /// Find stops around a location
    ///
    /// Upstream records missing a required field are dropped; the relative
    /// order of the surviving records is preserved.
    async fn translate_stops(
        &self,
        query: &StopQuery,
    ) -> Result<StopPointsResponse, ApplicationError>;

    /// Fetch arrival predictions for a single stop, in upstream order
    async fn translate_predictions(
        &self,
        query: &PredictionQuery,
    ) -> Result<Vec<Prediction>, ApplicationError>;
}
