use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Body posted to the model service.
///
/// An absent prompt is left out entirely, so the model sees `{}`. A `null`
/// prompt is sent as `{"prompt":null}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
}

impl ModelRequest {
    pub fn new(prompt: Option<Value>) -> Self {
        Self { prompt }
    }
}

/// Pulls the reply text out of a decoded model response.
///
/// Returns `Ok(None)` when the body carries no usable reply: the field is
/// missing, empty or false-like, or the body is not an object. A `null` body
/// has no fields to read and is an error.
pub fn extract_reply(body: Value) -> Result<Option<String>> {
    match body {
        Value::Null => Err(Error::invalid_response("model service returned a null body")),
        Value::Object(mut fields) => Ok(fields.remove("reply").and_then(reply_text)),
        _ => Ok(None),
    }
}

fn reply_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
