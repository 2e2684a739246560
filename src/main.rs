mod client;
mod config;
mod dto;
mod handlers;
mod service;
mod view;

use std::sync::Arc;

use client::ApiClient;
use handlers::AppState;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded feedback front config");
    tracing::info!("Configured upstream API: {}", cfg.api_base_url);

    if cfg.api_key == config::PLACEHOLDER_API_KEY {
        tracing::warn!("API key is still the placeholder value, analysis requests will be rejected");
    }

    // Shared state
    let client = ApiClient::new(cfg.api_base_url, cfg.api_key);
    let state = Arc::new(AppState::new(client, cfg.payment_email));

    let router = handlers::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to port {}: {e}", cfg.port);
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Feedback front starting, listening on {}", addr),
        Err(e) => tracing::warn!("Feedback front starting, local address unknown: {e}"),
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
