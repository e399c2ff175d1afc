//! TfL provider configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TflError;

/// Configuration for the TfL Unified API provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TflConfig {
    /// Base URL of the Unified API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every upstream request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.tfl.gov.uk".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("transit-gateway/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TflConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl TflConfig {
    /// Create a configuration pointing at a mock upstream
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        self.endpoint(&[]).map(|_| ()).map_err(|e| e.to_string())
    }

    /// Build an endpoint URL by appending path segments to the base URL
    ///
    /// Segments are percent-encoded, so caller-supplied identifiers cannot
    /// change the shape of the path.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, TflError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TflError::ConfigurationError(format!("invalid base_url: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| {
                TflError::ConfigurationError("base_url cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
