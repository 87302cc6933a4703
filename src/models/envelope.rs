use serde::Serialize;
use serde_json::{json, Value};

/// `{status, message, data}` wrapper used by part of the crew API.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Envelope {
            status: 200,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Envelope carrying only a status and message, no `data` key.
    pub fn message_only(status: u16, message: impl Into<String>) -> Self {
        Envelope {
            status,
            message: message.into(),
            data: None,
        }
    }
}

/// How a route shaped its body in the API the client was written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    /// Bare object or array.
    Bare,
    /// Already wrapped in `{status, message, data?}`.
    Enveloped,
    /// No body at all.
    Empty,
}

/// Rewrites a body into the `{status, message, data}` envelope.
pub fn normalize(shape: Shape, status: u16, body: Option<Value>) -> Value {
    match (shape, body) {
        (Shape::Enveloped, Some(Value::Object(mut map))) => {
            map.entry("data").or_insert(Value::Null);
            Value::Object(map)
        }
        (_, Some(body)) => json!({ "status": status, "message": "", "data": body }),
        (_, None) => json!({ "status": status, "message": "", "data": null }),
    }
}
