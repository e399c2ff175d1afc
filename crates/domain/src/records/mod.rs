//! Normalized records returned to gateway callers
//!
//! These are the minimal, stable shapes the gateway promises. Upstream records
//! carry many more fields; everything not listed here is discarded.

use serde::{Deserialize, Serialize};

/// A stop near the searched location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPoint {
    /// Letter painted on the stop flag (e.g. "H")
    pub stop_letter: String,
    /// NaPTAN identifier of the stop
    pub naptan_id: String,
    /// Distance from the searched location in meters
    #[serde(rename = "distance")]
    pub distance_meters: f64,
}

impl StopPoint {
    /// Create a new stop point
    pub fn new(
        stop_letter: impl Into<String>,
        naptan_id: impl Into<String>,
        distance_meters: f64,
    ) -> Self {
        Self {
            stop_letter: stop_letter.into(),
            naptan_id: naptan_id.into(),
            distance_meters,
        }
    }
}

/// Payload of a successful stop search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsResponse {
    /// Stops in upstream order, incomplete records removed
    pub stop_points: Vec<StopPoint>,
}

impl StopPointsResponse {
    /// Create a response from a list of stops
    #[must_use]
    pub const fn new(stop_points: Vec<StopPoint>) -> Self {
        Self { stop_points }
    }

    /// Number of stops in the response
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_points.len()
    }

    /// Whether the response contains no stops
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_points.is_empty()
    }
}

/// A predicted bus arrival
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Public line name (e.g. "237")
    pub line_name: String,
    /// Seconds until the vehicle reaches the stop
    pub time_to_station: i64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(line_name: impl Into<String>, time_to_station: i64) -> Self {
        Self {
            line_name: line_name.into(),
            time_to_station,
        }
    }
}
