use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{FeedbackForm, PaymentForm},
    handlers::AppState,
    service::{FeedbackSubmitter, PaymentInitiator},
    view::{AlertSlot, ResultRegion, render_page},
};

#[debug_handler]
pub async fn index() -> Response {
    (StatusCode::OK, Html(render_page(""))).into_response()
}

#[debug_handler]
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FeedbackForm>,
) -> Response {
    // Each submission gets its own region; on error it stays empty
    let region = ResultRegion::new();
    let submitter = FeedbackSubmitter::new(state.client.clone(), Arc::new(region.clone()));

    let status = match submitter.submit(form).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!("failed to analyze feedback: {}", e);
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Html(render_page(&region.contents()))).into_response()
}

#[debug_handler]
pub async fn start_payment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PaymentForm>,
) -> Response {
    let (slot, alert) = AlertSlot::channel();
    let initiator = PaymentInitiator::new(
        state.client.clone(),
        Arc::new(slot),
        state.payment_email.clone(),
    );

    if let Err(e) = initiator.start_payment(form.amount).await {
        tracing::error!("failed to create payment intent: {}", e);
        return StatusCode::BAD_GATEWAY.into_response();
    }

    match alert.await {
        Ok(message) => (StatusCode::OK, message).into_response(),
        Err(e) => {
            tracing::error!("payment alert was never issued: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[debug_handler]
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    match state.client.status().await {
        Ok(status) => {
            tracing::debug!("Upstream status: {} {}", status.status, status.message);
            (StatusCode::OK, "ok").into_response()
        }
        Err(e) => {
            tracing::warn!("Upstream health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Upstream unavailable").into_response()
        }
    }
}
