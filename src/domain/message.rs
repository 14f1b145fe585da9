use std::error::Error;

use serde_json::{Map, Value};

/// Capability for payloads that carry their own JSON representation.
pub trait ToJson {
    fn to_json(&self) -> String;
}

/// Capability for payloads convertible into a structural value for dumping.
pub trait ToStructure {
    fn to_structure(&self) -> Value;
}

/// A log payload, tagged by the shape that decides its notification path.
///
/// Variant order fixes the dispatch precedence: exception first, then the
/// JSON capability, then the structure capability, then literal structures,
/// then plain text.
pub enum Message {
    /// An error value, forwarded to the notifier without formatting.
    Exception(Box<dyn Error + Send + Sync>),
    /// Payload exposing its own JSON string.
    Json(Box<dyn ToJson + Send + Sync>),
    /// Payload convertible to a structural value.
    Structured(Box<dyn ToStructure + Send + Sync>),
    /// Literal mapping/array structure.
    Value(Value),
    /// Plain string payload.
    Text(String),
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Map<String, Value>> for Message {
    fn from(map: Map<String, Value>) -> Self {
        Self::Value(Value::Object(map))
    }
}

impl From<Box<dyn Error + Send + Sync>> for Message {
    fn from(exception: Box<dyn Error + Send + Sync>) -> Self {
        Self::Exception(exception)
    }
}
