use async_trait::async_trait;
use chat_proxy::{
    Error, Result,
    model::{ModelClient, ModelRequest},
};
use std::sync::{Arc, Mutex};

/// What the mock model service does with every request.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Reply(Option<String>),
    Upstream(u16),
    Failure(String),
}

/// Mock model client for testing
#[derive(Debug, Clone)]
pub struct MockModelClient {
    pub outcome: MockOutcome,
    pub requests: Arc<Mutex<Vec<ModelRequest>>>,
}

impl MockModelClient {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::new(MockOutcome::Reply(Some(reply.to_string())))
    }

    pub fn silent() -> Self {
        Self::new(MockOutcome::Reply(None))
    }

    pub fn upstream_status(status: u16) -> Self {
        Self::new(MockOutcome::Upstream(status))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(MockOutcome::Failure(message.to_string()))
    }

    pub fn get_requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, request: ModelRequest) -> Result<Option<String>> {
        self.requests.lock().unwrap().push(request);

        match &self.outcome {
            MockOutcome::Reply(reply) => Ok(reply.clone()),
            MockOutcome::Upstream(status) => Err(Error::Upstream { status: *status }),
            MockOutcome::Failure(message) => Err(Error::invalid_response(message.clone())),
        }
    }
}
