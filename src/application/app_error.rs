use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Required secrets are missing from the environment.
    #[error("Server misconfigured: {0}")]
    Configuration(String),

    #[error("Unhandled event type: {0}")]
    UnhandledEventType(String),

    #[error("{0}")]
    InvalidInput(String),

    /// The email provider answered with a non-success status.
    #[error("Postmark API error ({status}): {body}")]
    Delivery { status: u16, body: String },

    #[error("{0}")]
    Internal(String),

    /// The auth service could not be reached.
    #[error("Auth service unavailable: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::UnhandledEventType(_) | AppError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
