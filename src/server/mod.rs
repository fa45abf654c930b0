pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::*;

use crate::{Result, config::Config, model::HttpModelClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let model = HttpModelClient::new(&config.model)?;
    info!("Forwarding prompts to {}", model.endpoint());

    let app = router(AppState::new(Arc::new(model)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
