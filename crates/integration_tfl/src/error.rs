//! TfL error types

use thiserror::Error;

/// Errors that can occur while talking to the TfL Unified API
#[derive(Debug, Error)]
pub enum TflError {
    /// Connection to the upstream failed (DNS, refused, reset, ...)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Upstream answered with a status other than 200
    #[error("Upstream responded with HTTP {status}")]
    UpstreamStatus {
        /// Status code as sent by the upstream
        status: u16,
    },

    /// Failed to parse a 200 response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl TflError {
    /// Returns true if the upstream could not be reached at all
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    /// Upstream status code, if the upstream answered with a non-200 status
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status } => Some(*status),
            _ => None,
        }
    }
}
