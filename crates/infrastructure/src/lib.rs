//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the TfL provider adapter, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, GatewayConfig, LogFormat, ServerConfig};
pub use telemetry::{DEFAULT_LOG_FILTER, init_logging};
