//! NaPTAN stop identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a physical transit stop, as issued by the upstream service
///
/// The identifier is opaque to the gateway; the only constraint is that it is
/// not blank, since it becomes a path segment of the upstream request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NaptanId(String);

impl NaptanId {
    /// Create a new identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_field(
                "stop.naptanId",
                "must not be empty",
            ));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NaptanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NaptanId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
