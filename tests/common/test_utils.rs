use super::mocks::MockModelClient;
use axum::Router;
use chat_proxy::{
    Result,
    config::{Config, LogsConfig, ModelConfig, ServerConfig},
    model::HttpModelClient,
    server::{self, AppState},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration pointing at the given model endpoint
pub fn create_test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        model: ModelConfig {
            endpoint: endpoint.to_string(),
        },
    }
}

/// Router backed by a mock model client
pub fn create_mock_app(mock: MockModelClient) -> Router {
    server::router(AppState::new(Arc::new(mock)))
}

/// Router backed by a real HTTP client talking to `endpoint`
pub fn create_http_app(endpoint: &str) -> Router {
    let config = create_test_config(endpoint);
    let client = HttpModelClient::new(&config.model).expect("valid test endpoint");
    server::router(AppState::new(Arc::new(client)))
}

/// An endpoint nothing is listening on
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

model:
  endpoint: "http://127.0.0.1:9000/generate"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
