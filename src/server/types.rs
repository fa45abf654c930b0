use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NO_REPLY: &str = "Ответ не получен";
const MODEL_UNAVAILABLE: &str = "Ошибка связи с моделью";
const SERVER_ERROR: &str = "Произошла ошибка на сервере";

/// Fixed replies a caller can receive instead of generated text.
///
/// Clients match on the message text, so the strings must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// The model answered without a `reply`.
    NoReply,
    /// The model answered with a non-2xx status.
    ModelUnavailable,
    /// Anything else went wrong while handling the request.
    ServerError,
}

impl ReplyKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoReply => NO_REPLY,
            Self::ModelUnavailable => MODEL_UNAVAILABLE,
            Self::ServerError => SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatResponse {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl From<ReplyKind> for ChatResponse {
    fn from(kind: ReplyKind) -> Self {
        Self::new(kind.message())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Reads the prompt from a raw chat request body.
///
/// The prompt is not validated. Any JSON object is accepted and a missing
/// field yields `None`; scalars and arrays are treated as objects without a
/// prompt. Invalid JSON and a bare `null` are rejected.
pub fn parse_prompt(body: &[u8]) -> Result<Option<Value>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::invalid_request(format!("body is not valid JSON: {}", e)))?;

    match value {
        Value::Null => Err(Error::invalid_request("body is null")),
        Value::Object(mut fields) => Ok(fields.remove("prompt")),
        _ => Ok(None),
    }
}
