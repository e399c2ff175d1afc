//! Domain layer for the transit gateway
//!
//! Contains the inbound query types, the normalized records the gateway promises
//! to its callers, the request validator, and domain errors.
//! This layer performs no I/O.

pub mod errors;
pub mod queries;
pub mod records;
pub mod validation;

pub use errors::DomainError;
pub use queries::{NaptanId, PredictionQuery, QueryValue, StopQuery};
pub use records::{Prediction, StopPoint, StopPointsResponse};
pub use validation::RequestValidator;
