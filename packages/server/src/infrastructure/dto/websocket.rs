//! WebSocket message DTOs.
//!
//! Inbound frames are parsed into a `serde_json::Value` first so that shape
//! validation and `sender` coercion can follow the lenient rules of the wire
//! protocol instead of failing on the first unexpected field type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::InboundRejection;

/// The only inbound `type` the relay accepts.
pub const INBOUND_MESSAGE_TYPE: &str = "message";

/// Validated client → server chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub text: String,
    /// `None` when the client sent no usable sender.
    pub sender: Option<String>,
}

impl InboundMessage {
    /// Parse and validate a raw text frame.
    ///
    /// Accepts `{"type":"message","text":<string>,"sender":<any>}`. Extra
    /// fields are ignored.
    pub fn parse(raw: &str) -> Result<Self, InboundRejection> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| InboundRejection::MalformedJson(e.to_string()))?;

        let Value::Object(object) = value else {
            return Err(InboundRejection::NotAnObject);
        };

        match object.get("type") {
            Some(Value::String(kind)) if kind == INBOUND_MESSAGE_TYPE => {}
            Some(other) => return Err(InboundRejection::UnsupportedType(other.to_string())),
            None => return Err(InboundRejection::UnsupportedType("null".to_string())),
        }

        let text = match object.get("text") {
            Some(Value::String(text)) => text.clone(),
            _ => return Err(InboundRejection::MissingText),
        };

        Ok(Self {
            text,
            sender: coerce_sender(&object),
        })
    }
}

/// Coerce the `sender` field to a string.
///
/// Falsy values (`null`, `false`, `0`, `""`) and absence yield `None`; any
/// other value is stringified the way a JavaScript client would expect.
fn coerce_sender(object: &Map<String, Value>) -> Option<String> {
    match object.get("sender")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(stringify(other)),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => number_to_string(f),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip form, switching to exponent notation outside
/// `[1e-6, 1e21)` with an explicit `+` on positive exponents.
fn number_to_string(f: f64) -> String {
    if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) {
        let formatted = format!("{:e}", f);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        f.to_string()
    }
}

/// Server → client frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    /// User-authored chat message (echo and fan-out).
    Message {
        id: String,
        text: String,
        sender: String,
        timestamp: i64,
    },
    /// Join/leave notice generated by the relay.
    System { text: String, timestamp: i64 },
}

impl OutboundMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
