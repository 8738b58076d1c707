//! The decoded response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `results` payload as returned by `info` and `stats`.
pub type ResultsMap = Map<String, Value>;

/// The full decoded JSON response.
///
/// Holds whatever the service sent, without assuming a shape. An empty
/// envelope stands for "no data" (failed transport or undecodable body).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    /// Decodes a response body. Absent or malformed input, or JSON that is
    /// not an object, yields an empty envelope.
    pub fn decode(data: Option<&str>) -> Self {
        let Some(data) = data else {
            return Self::default();
        };
        match serde_json::from_str::<Map<String, Value>>(data) {
            Ok(map) => Self(map),
            Err(e) => {
                tracing::warn!("Failed to decode response body: {}", e);
                Self::default()
            }
        }
    }

    /// The `errorCode` field. Numeric strings are accepted as well.
    pub fn error_code(&self) -> Option<i64> {
        match self.0.get("errorCode")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// True only when `errorCode` is present and equal to 0.
    pub fn is_success(&self) -> bool {
        self.error_code() == Some(0)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.0.get("errorMessage").and_then(Value::as_str)
    }

    /// The textual `statusCode` field (e.g. `"OK"`, `"ERROR"`).
    pub fn status_code(&self) -> Option<&str> {
        self.0.get("statusCode").and_then(Value::as_str)
    }

    pub fn results(&self) -> Option<&Value> {
        self.0.get("results")
    }

    pub fn results_map(&self) -> Option<&ResultsMap> {
        self.results().and_then(Value::as_object)
    }

    /// Looks up `results.<key>.<field>` as a string.
    pub fn result_field(&self, key: &str, field: &str) -> Option<&str> {
        self.results_map()?.get(key)?.get(field)?.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Envelope {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
