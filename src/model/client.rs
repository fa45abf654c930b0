use super::types::*;
use crate::{Error, Result, config::ModelConfig};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends one prompt to the model service.
    ///
    /// `Ok(None)` means the service answered successfully but without a reply.
    async fn generate(&self, request: ModelRequest) -> Result<Option<String>>;
}

pub struct HttpModelClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpModelClient {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            Error::config(format!("Invalid model endpoint '{}': {}", config.endpoint, e))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Model endpoint must be http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        debug!("Creating model client for: {}", endpoint);

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn generate(&self, request: ModelRequest) -> Result<Option<String>> {
        // `.json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        debug!("Received model response with status {}", status);

        extract_reply(body)
    }
}
