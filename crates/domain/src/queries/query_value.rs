//! Scalar value passed through from a caller request to an upstream query

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A scalar JSON value that can be rendered as a query parameter
///
/// Numbers are rendered in their shortest round-trip form: `51.492628` is
/// forwarded unchanged, while `-0.223060` loses its trailing zero and becomes
/// `-0.22306`. Strings are forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// String value, forwarded verbatim
    Text(String),
    /// Numeric value
    Number(Number),
    /// Boolean value, rendered as `true`/`false`
    Flag(bool),
}

impl QueryValue {
    /// Convert a JSON value into a query value
    ///
    /// Returns `None` for `null`, arrays and objects.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::Bool(b) => Some(Self::Flag(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Render the value the way it appears in an upstream query string
    #[must_use]
    pub fn as_param(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}
