pub mod rest;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::client::ApiClient;

/// Only the transport is shared; result regions and alerts are per request.
pub struct AppState {
    pub client: Arc<ApiClient>,
    pub payment_email: String,
}

impl AppState {
    pub fn new(client: ApiClient, payment_email: String) -> Self {
        Self {
            client: Arc::new(client),
            payment_email,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(rest::index))
        .route("/feedback", post(rest::submit_feedback))
        .route("/payment", post(rest::start_payment))
        .route("/health", get(rest::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
