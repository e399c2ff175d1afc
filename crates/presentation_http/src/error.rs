//! API error handling
//!
//! Failures are reported by status code alone. The response body is always
//! empty, so nothing about the upstream or the validator leaks to callers.

use application::ApplicationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not a JSON document
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Failure raised by a gateway use case
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ApiError {
    /// Status reported to the caller
    ///
    /// Upstream statuses are passed through unchanged. A code outside the
    /// range HTTP allows is reported as 500.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Application(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Whether the caller's request caused the failure
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::InvalidBody(_) => true,
            Self::Application(err) => err.is_client_error(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.is_client_error() {
            debug!(status = status.as_u16(), error = %self, "Request rejected");
        } else if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Upstream status passed through");
        }

        status.into_response()
    }
}
