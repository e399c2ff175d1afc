//! Application layer - Use cases and orchestration
//!
//! Defines the transit provider port, the gateway use cases built on top of it,
//! and the error contract that maps every failure onto a caller-facing status.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
