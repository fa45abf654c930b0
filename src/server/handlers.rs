use super::types::{ChatResponse, HealthResponse, ReplyKind, parse_prompt};
use crate::{
    Error, Result,
    model::{ModelClient, ModelRequest},
};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }
}

/// Relays a prompt to the model service.
///
/// The body is read raw, and a failed read is kept rather than rejected, so
/// malformed or oversized input ends in the same JSON reply as every other
/// failure.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>> {
    let outcome = match body {
        Ok(body) => relay(&state, &body).await,
        Err(rejection) => Err(Error::invalid_request(format!(
            "failed to read body: {}",
            rejection.body_text()
        ))),
    };

    match outcome {
        Ok(reply) => {
            info!("Model replied");
            let reply = reply.unwrap_or_else(|| ReplyKind::NoReply.message().to_string());
            Ok(Json(ChatResponse::new(reply)))
        }
        Err(e @ Error::Upstream { .. }) => {
            debug!("Model service rejected request: {}", e);
            Err(e)
        }
        Err(e) => {
            error!("Failed to process chat request: {}", e);
            Err(e)
        }
    }
}

async fn relay(state: &AppState, body: &[u8]) -> Result<Option<String>> {
    let prompt = parse_prompt(body)?;
    debug!("Forwarding prompt to model service");
    state.model.generate(ModelRequest::new(prompt)).await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
