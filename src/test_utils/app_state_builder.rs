//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory doubles for testing HTTP endpoints.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    http::{HeaderMap, StatusCode},
};
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{auth_proxy::AuthHandler, email::EmailSender, webhook::WebhookUseCases},
    domain::entities::auth_request::AuthResponse,
    infra::config::{AppConfig, DEFAULT_POSTMARK_API_URL, SecurityHeaders, StaticAssets},
    test_utils::{InMemoryEmailSender, RecordingAuthHandler},
};

/// Builder for creating `AppState` with in-memory doubles for testing.
///
/// # Example
///
/// ```ignore
/// let email_sender = Arc::new(InMemoryEmailSender::new());
///
/// let app_state = TestAppStateBuilder::new()
///     .with_email_sender(email_sender.clone())
///     .without_api_token()
///     .build();
/// ```
pub struct TestAppStateBuilder {
    email_sender: Arc<dyn EmailSender>,
    auth_handler: Arc<dyn AuthHandler>,
    api_token: Option<String>,
    email_from: Option<String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            email_sender: Arc::new(InMemoryEmailSender::new()),
            auth_handler: Arc::new(RecordingAuthHandler::new(AuthResponse {
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                body: Bytes::new(),
            })),
            api_token: Some("test-postmark-token".to_string()),
            email_from: Some("App <no-reply@example.com>".to_string()),
        }
    }

    pub fn with_email_sender(mut self, email_sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = email_sender;
        self
    }

    pub fn with_auth_handler(mut self, auth_handler: Arc<dyn AuthHandler>) -> Self {
        self.auth_handler = auth_handler;
        self
    }

    pub fn without_api_token(mut self) -> Self {
        self.api_token = None;
        self
    }

    pub fn without_email_from(mut self) -> Self {
        self.email_from = None;
        self
    }

    pub fn build(self) -> AppState {
        let api_token = self.api_token.map(|t| SecretString::new(t.into()));

        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            auth_service_url: Url::parse("http://auth.test/").unwrap(),
            postmark_api_url: Url::parse(DEFAULT_POSTMARK_API_URL).unwrap(),
            postmark_api_token: api_token.clone(),
            email_from: self.email_from.clone(),
            security_headers: SecurityHeaders::default(),
            static_assets: StaticAssets::default(),
        };

        let webhook_use_cases = WebhookUseCases::new(self.email_sender, api_token, self.email_from);

        AppState {
            config: Arc::new(config),
            webhook_use_cases: Arc::new(webhook_use_cases),
            auth_handler: self.auth_handler,
        }
    }
}
