use crate::server::{ChatResponse, ReplyKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model service returned status {status}")]
    Upstream { status: u16 },

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// The reply a caller sees when this error ends a chat request.
    pub fn reply_kind(&self) -> ReplyKind {
        match self {
            Self::Upstream { .. } => ReplyKind::ModelUnavailable,
            _ => ReplyKind::ServerError,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ChatResponse::from(self.reply_kind());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
