//! Logging infrastructure
//!
//! Installs the global `tracing` subscriber used by the server binary.

mod logging;

pub use logging::{DEFAULT_LOG_FILTER, init_logging};
