//! Provider selection settings.

use serde::{Deserialize, Serialize};

/// Gateway dispatch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Provider used when a request carries no `application.apiName`
    #[serde(default = "default_provider")]
    pub default_provider: String,
}

fn default_provider() -> String {
    "TflApi".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
        }
    }
}
