use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::webhook::{EventType, WebhookPayload},
    use_cases::email::EmailSender,
};

/// Turns auth provider webhook deliveries into transactional emails.
#[derive(Clone)]
pub struct WebhookUseCases {
    email: Arc<dyn EmailSender>,
    api_token: Option<SecretString>,
    email_from: Option<String>,
}

impl WebhookUseCases {
    /// Empty strings count as unset, matching how the values arrive from
    /// a `.env` file with a blank assignment.
    pub fn new(
        email: Arc<dyn EmailSender>,
        api_token: Option<SecretString>,
        email_from: Option<String>,
    ) -> Self {
        Self {
            email,
            api_token: api_token.filter(|t| !t.expose_secret().is_empty()),
            email_from: email_from.filter(|f| !f.is_empty()),
        }
    }

    /// Process one raw webhook body end to end.
    ///
    /// The configuration check runs before the body is even parsed, so a
    /// misconfigured deployment never reaches the email provider.
    #[instrument(skip_all)]
    pub async fn handle_delivery(&self, body: &[u8]) -> AppResult<EventType> {
        let (api_token, email_from) = self.credentials()?;

        let raw: Value = serde_json::from_slice(body)?;
        if !raw.is_object() {
            return Err(AppError::Internal(format!(
                "Webhook body is not a JSON object: {raw}"
            )));
        }
        log_received(&raw);

        let event_type = match raw.get("event_type") {
            Some(Value::String(s)) => s
                .parse::<EventType>()
                .map_err(|_| AppError::UnhandledEventType(s.clone()))?,
            Some(other) => return Err(AppError::UnhandledEventType(other.to_string())),
            None => return Err(AppError::UnhandledEventType("undefined".to_string())),
        };

        let payload: WebhookPayload = serde_json::from_value(raw)
            .map_err(|e| AppError::InvalidInput(format!("Invalid {event_type} payload: {e}")))?;

        self.dispatch(api_token, email_from, &payload).await?;
        Ok(event_type)
    }

    /// Send the email matching the payload's event type.
    pub async fn dispatch(
        &self,
        api_token: &str,
        email_from: &str,
        payload: &WebhookPayload,
    ) -> AppResult<()> {
        let recipient = payload.recipient();
        match payload {
            WebhookPayload::VerifyEmail {
                verification_link, ..
            } => {
                self.email
                    .send_verification_email(
                        api_token,
                        email_from,
                        &recipient.email,
                        &recipient.name,
                        verification_link,
                    )
                    .await
            }
            WebhookPayload::PasswordReset { reset_link, .. } => {
                self.email
                    .send_password_reset_email(
                        api_token,
                        email_from,
                        &recipient.email,
                        &recipient.name,
                        reset_link,
                    )
                    .await
            }
            WebhookPayload::MagicLogin {
                magic_login_link, ..
            } => {
                self.email
                    .send_magic_link_email(
                        api_token,
                        email_from,
                        &recipient.email,
                        &recipient.name,
                        magic_login_link,
                    )
                    .await
            }
        }
    }

    fn credentials(&self) -> AppResult<(&str, &str)> {
        match (&self.api_token, &self.email_from) {
            (Some(token), Some(from)) => Ok((token.expose_secret(), from.as_str())),
            _ => Err(AppError::Configuration(
                "missing required env vars: POSTMARK_API_TOKEN and/or EMAIL_FROM".to_string(),
            )),
        }
    }
}

fn log_received(raw: &Value) {
    let field = |key: &str| raw.get(key).and_then(Value::as_str);
    info!(
        event_type = ?field("event_type"),
        email = ?field("email"),
        name = ?field("name"),
        recordid = ?field("recordid"),
        payload = %raw,
        "Webhook received"
    );
}
