//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `gateway`: provider selection
//!
//! Provider settings live next to their integration crate (`integration_tfl::TflConfig`).
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. the file named by `TRANSIT_GATEWAY_CONFIG`, or else `config.toml` (or any
//!    format `config` understands) in the working directory
//! 3. environment variables, e.g. `TRANSIT_GATEWAY_SERVER__PORT=8080` or
//!    `TRANSIT_GATEWAY_TFL__BASE_URL=http://localhost:9000`

mod gateway;
mod server;

use std::path::Path;

use integration_tfl::TflConfig;
use serde::{Deserialize, Serialize};

pub use gateway::GatewayConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "TRANSIT_GATEWAY";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "TRANSIT_GATEWAY_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider selection
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// TfL Unified API provider
    #[serde(default)]
    pub tfl: TflConfig,
}

impl AppConfig {
    /// Load configuration from environment and a config file
    ///
    /// The file named by `TRANSIT_GATEWAY_CONFIG` is required when that variable
    /// is set. Otherwise an optional `config.*` in the working directory is read.
    pub fn load() -> Result<Self, config::ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Self::build(config::File::with_name("config").required(false)),
        }
    }

    /// Load configuration from environment and an explicit file
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., TRANSIT_GATEWAY_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.gateway.default_provider.trim().is_empty() {
            return Err("gateway.default_provider must not be empty".to_string());
        }

        self.tfl.validate().map_err(|e| format!("tfl: {e}"))
    }
}
