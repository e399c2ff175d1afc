//! Application services - Use case implementations

mod gateway_service;

pub use gateway_service::GatewayService;
