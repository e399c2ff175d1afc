//! Stop search translation
//!
//! `GET {base}/StopPoint?lat=&lon=&radius=&stopTypes=&returnLines=` answers with
//! `{"stopPoints": [...]}`. Some upstream records lack a stop letter or other
//! fields; those records are dropped rather than failing the whole search.

use domain::{StopPoint, StopPointsResponse, StopQuery};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::TflError;

/// Path of the stop search endpoint, relative to the base URL
pub(crate) const STOP_POINT_SEGMENT: &str = "StopPoint";

/// Maps stop queries to upstream parameters and reduces upstream stop records
#[derive(Debug, Clone, Copy, Default)]
pub struct StopsTranslator;

impl StopsTranslator {
    /// Upstream query parameters for a stop search, values passed through unchanged
    #[must_use]
    pub fn params(query: &StopQuery) -> Vec<(&'static str, String)> {
        vec![
            ("lat", query.latitude.as_param()),
            ("lon", query.longitude.as_param()),
            ("radius", query.radius.as_param()),
            ("stopTypes", query.stop_types.as_param()),
            ("returnLines", query.return_lines.as_param()),
        ]
    }

    /// Reduce a decoded upstream body to normalized stop points
    ///
    /// # Errors
    ///
    /// Returns `TflError::ParseError` if the body has no `stopPoints` array.
    pub fn normalize(body: &Value) -> Result<StopPointsResponse, TflError> {
        let records = body
            .get("stopPoints")
            .and_then(Value::as_array)
            .ok_or_else(|| TflError::ParseError("missing stopPoints array".to_string()))?;

        let stop_points: Vec<StopPoint> = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let stop = Self::normalize_record(record);
                if stop.is_none() {
                    debug!(index, "Dropping incomplete stop record");
                }
                stop
            })
            .collect();

        let dropped = records.len() - stop_points.len();
        if dropped > 0 {
            info!(dropped, kept = stop_points.len(), "Dropped incomplete stop records");
        }

        Ok(StopPointsResponse::new(stop_points))
    }

    /// Extract the normalized fields of one record, `None` if any is absent
    #[must_use]
    pub fn normalize_record(record: &Value) -> Option<StopPoint> {
        let stop_letter = record.get("stopLetter").and_then(Value::as_str)?;
        let naptan_id = record.get("naptanId").and_then(Value::as_str)?;
        let distance = record.get("distance").and_then(Value::as_f64)?;

        Some(StopPoint::new(stop_letter, naptan_id, distance))
    }
}
