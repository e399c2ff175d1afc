//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod transit_provider_port;

pub use transit_provider_port::TransitProviderPort;

#[cfg(test)]
pub use transit_provider_port::MockTransitProviderPort;
