use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub const WEBHOOK_PATH: &str = "/mauth-webhook";

pub fn router() -> Router<AppState> {
    Router::new().route(WEBHOOK_PATH, get(status).post(receive))
}

/// POST /api/public/webhooks/mauth-webhook
/// Receives auth provider events and sends the matching email.
///
/// The raw body is taken instead of `Json<_>` so a malformed payload is
/// reported through `AppError` like every other failure.
async fn receive(State(app_state): State<AppState>, body: Bytes) -> AppResult<impl IntoResponse> {
    app_state.webhook_use_cases.handle_delivery(&body).await?;
    Ok((StatusCode::OK, Json(json!({ "received": true }))))
}

/// GET /api/public/webhooks/mauth-webhook
/// Reachability probe; does no work and ignores configuration.
async fn status() -> impl IntoResponse {
    Json(json!({
        "status": "Webhook endpoint is active",
        "method": "POST",
        "note": "This endpoint accepts POST requests from Mindful Auth"
    }))
}
