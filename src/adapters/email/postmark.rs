use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::email::EmailMessage,
    use_cases::email::EmailSender,
};

const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
const MESSAGE_STREAM: &str = "outbound";

/// Sends email through Postmark's single-message endpoint.
///
/// Holds no credentials; the server token arrives with each call.
#[derive(Clone)]
pub struct PostmarkEmailSender {
    client: Client,
    api_url: Url,
}

impl PostmarkEmailSender {
    pub fn new(client: Client, api_url: Url) -> Self {
        Self { client, api_url }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PostmarkReq<'a> {
    message_stream: &'a str,
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

#[async_trait]
impl EmailSender for PostmarkEmailSender {
    #[instrument(skip_all, fields(to = %message.to, subject = %message.subject))]
    async fn send(&self, api_token: &str, message: &EmailMessage) -> AppResult<()> {
        if api_token.is_empty() {
            return Err(AppError::Configuration("Postmark API token is empty".into()));
        }
        if message.from.is_empty() || message.to.is_empty() {
            return Err(AppError::InvalidInput(
                "Email requires both a sender and a recipient".into(),
            ));
        }

        let body = PostmarkReq {
            message_stream: MESSAGE_STREAM,
            from: &message.from,
            to: &message.to,
            subject: &message.subject,
            html_body: &message.html_body,
            text_body: &message.text_body,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(SERVER_TOKEN_HEADER, api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send email: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {e}>"));
            return Err(AppError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Email accepted by Postmark");
        Ok(())
    }
}
