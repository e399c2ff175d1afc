//! Domain-level errors

use thiserror::Error;

/// Errors that can occur while turning a caller request into a typed query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field is absent (or explicitly `null`)
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field is present but cannot be used as a query value
    #[error("Invalid field {path}: {reason}")]
    InvalidField { path: String, reason: String },
}

impl DomainError {
    /// Create an invalid field error
    pub fn invalid_field(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the offending field
    #[must_use]
    pub fn field_path(&self) -> &str {
        match self {
            Self::MissingField(path) | Self::InvalidField { path, .. } => path,
        }
    }
}
