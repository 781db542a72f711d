use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_client_error() {
            tracing::warn!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }

        match self {
            AppError::Configuration(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, "Server misconfigured", None)
            }
            e @ AppError::UnhandledEventType(_) => {
                error_resp(StatusCode::BAD_REQUEST, &e.to_string(), None)
            }
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, &msg, None),
            e @ AppError::Delivery { .. } => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                Some(e.to_string()),
            ),
            AppError::Internal(msg) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                Some(msg),
            ),
            AppError::Upstream(_) => {
                error_resp(StatusCode::BAD_GATEWAY, "Auth service unavailable", None)
            }
        }
    }
}

fn error_resp(status: StatusCode, error: &str, details: Option<String>) -> Response {
    let body = match details {
        Some(details) => serde_json::json!({ "error": error, "details": details }),
        None => serde_json::json!({ "error": error }),
    };
    (status, Json(body)).into_response()
}
