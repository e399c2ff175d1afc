//! Arrival predictions translation
//!
//! `GET {base}/StopPoint/{naptanId}/Arrivals?mode=bus` answers with a bare array
//! of arrival records. Every record is mapped, in upstream order; a record
//! lacking `lineName` or `timeToStation` means the upstream broke its contract,
//! and the whole body is rejected as undecodable.

use domain::{Prediction, PredictionQuery};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::TflConfig;
use crate::error::TflError;
use crate::stops::STOP_POINT_SEGMENT;

/// Path segment appended after the stop identifier
const ARRIVALS_SEGMENT: &str = "Arrivals";

/// The only transit mode the gateway asks predictions for
pub const ARRIVALS_MODE: &str = "bus";

/// Maps prediction queries to upstream requests and reduces arrival records
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionsTranslator;

impl PredictionsTranslator {
    /// Arrivals endpoint of a stop
    ///
    /// # Errors
    ///
    /// Returns `TflError::ConfigurationError` if the base URL is unusable.
    pub fn url(config: &TflConfig, query: &PredictionQuery) -> Result<Url, TflError> {
        config.endpoint(&[
            STOP_POINT_SEGMENT,
            query.naptan_id.as_str(),
            ARRIVALS_SEGMENT,
        ])
    }

    /// Fixed upstream query parameters
    #[must_use]
    pub fn params() -> Vec<(&'static str, String)> {
        vec![("mode", ARRIVALS_MODE.to_string())]
    }

    /// Reduce a decoded upstream array to normalized predictions
    ///
    /// # Errors
    ///
    /// Returns `TflError::ParseError` if the body is not an array of arrival records.
    pub fn normalize(body: Value) -> Result<Vec<Prediction>, TflError> {
        let records: Vec<RawArrival> =
            serde_json::from_value(body).map_err(|e| TflError::ParseError(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|raw| Prediction::new(raw.line_name, raw.time_to_station))
            .collect())
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArrival {
    line_name: String,
    // Whole seconds; a fractional value fails the response
    time_to_station: i64,
}
