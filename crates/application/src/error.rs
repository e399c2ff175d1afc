//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Status returned for requests that fail validation
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Status returned for failures the caller cannot act on
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Errors that can occur in the application layer
///
/// Every variant maps onto exactly one caller-facing status through
/// [`ApplicationError::status_code`].
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller asked for a provider that is not registered
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Transport failure reaching the upstream service
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Upstream answered with a status other than 200
    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),

    /// Upstream answered 200 with a body that could not be decoded
    #[error("Upstream response could not be decoded: {0}")]
    UpstreamDecode(String),

    /// Provider is misconfigured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Status the gateway reports to its caller
    ///
    /// Non-200 upstream statuses are mirrored verbatim.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Domain(_) | Self::UnknownProvider(_) => STATUS_BAD_REQUEST,
            Self::UpstreamStatus(status) => *status,
            Self::UpstreamUnreachable(_) | Self::UpstreamDecode(_) | Self::Configuration(_) => {
                STATUS_INTERNAL_ERROR
            },
        }
    }

    /// Whether the failure was caused by the caller's request
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::UnknownProvider(_))
    }
}
