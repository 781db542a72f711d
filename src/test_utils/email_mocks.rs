use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::email::EmailMessage,
    use_cases::email::EmailSender,
};

// ============================================================================
// InMemoryEmailSender
// ============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub api_token: String,
    pub message: EmailMessage,
}

/// Records every message instead of sending it.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, api_token: &str, message: &EmailMessage) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentEmail {
            api_token: api_token.to_string(),
            message: message.clone(),
        });
        Ok(())
    }
}

// ============================================================================
// FailingEmailSender
// ============================================================================

/// Rejects every message the way the provider does on a non-2xx reply.
pub struct FailingEmailSender {
    status: u16,
    body: String,
}

impl FailingEmailSender {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _api_token: &str, _message: &EmailMessage) -> AppResult<()> {
        Err(AppError::Delivery {
            status: self.status,
            body: self.body.clone(),
        })
    }
}
