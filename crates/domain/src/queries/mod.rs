//! Typed queries produced from caller requests
//!
//! Queries live for exactly one request. Field values are carried through as the
//! caller sent them, so the gateway never converts units or re-formats numbers.

mod naptan_id;
mod query_value;

pub use naptan_id::NaptanId;
pub use query_value::QueryValue;

/// A geo-search for stops around a point
#[derive(Debug, Clone, PartialEq)]
pub struct StopQuery {
    /// Latitude as received
    pub latitude: QueryValue,
    /// Longitude as received
    pub longitude: QueryValue,
    /// Search radius in meters
    pub radius: QueryValue,
    /// Upstream stop type filter (e.g. `NaptanPublicBusCoachTram`)
    pub stop_types: QueryValue,
    /// Whether the upstream should include line information
    pub return_lines: QueryValue,
}

/// A request for arrival predictions at a single stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    /// Stop to query
    pub naptan_id: NaptanId,
}

impl PredictionQuery {
    /// Create a new prediction query
    #[must_use]
    pub const fn new(naptan_id: NaptanId) -> Self {
        Self { naptan_id }
    }
}
