use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    application::email_templates,
    domain::entities::email::EmailMessage,
};

/// Delivers transactional email through an external provider.
///
/// The API token is passed per call because it is read from the
/// environment for each webhook rather than baked into the sender.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, api_token: &str, message: &EmailMessage) -> AppResult<()>;

    async fn send_verification_email(
        &self,
        api_token: &str,
        from: &str,
        to: &str,
        name: &str,
        verification_link: &str,
    ) -> AppResult<()> {
        let message =
            email_templates::verification_email(name, verification_link).into_message(from, to);
        self.send(api_token, &message).await
    }

    async fn send_password_reset_email(
        &self,
        api_token: &str,
        from: &str,
        to: &str,
        name: &str,
        reset_link: &str,
    ) -> AppResult<()> {
        let message =
            email_templates::password_reset_email(name, reset_link).into_message(from, to);
        self.send(api_token, &message).await
    }

    async fn send_magic_link_email(
        &self,
        api_token: &str,
        from: &str,
        to: &str,
        name: &str,
        magic_login_link: &str,
    ) -> AppResult<()> {
        let message =
            email_templates::magic_link_email(name, magic_login_link).into_message(from, to);
        self.send(api_token, &message).await
    }
}
