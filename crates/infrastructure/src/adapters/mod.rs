//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod tfl_adapter;

pub use tfl_adapter::TflProviderAdapter;
