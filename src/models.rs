//! Value types passed through a weather lookup

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Free-text location as supplied by the caller.
///
/// The string is kept exactly as given: no trimming, case folding or
/// escaping happens before it is placed into the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new<S: Into<String>>(location: S) -> Self {
        Self(location.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationQuery {
    fn from(location: &str) -> Self {
        Self::new(location)
    }
}

impl From<String> for LocationQuery {
    fn from(location: String) -> Self {
        Self(location)
    }
}

/// Structured document returned by the upstream service, untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherPayload(Value);

impl WeatherPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Compact JSON text of the parsed document
    #[must_use]
    pub fn to_text(&self) -> String {
        self.0.to_string()
    }
}
