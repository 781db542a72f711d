use crate::{
    adapters::{
        auth::central::CentralAuthHandler, email::postmark::PostmarkEmailSender,
        http::app_state::AppState,
    },
    infra::{config::AppConfig, error::InfraError, http_client},
    use_cases::webhook::WebhookUseCases,
};
use std::fs::File;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env()?;

    if config.postmark_api_token.is_none() || config.email_from.is_none() {
        tracing::warn!(
            "POSTMARK_API_TOKEN and/or EMAIL_FROM not set; webhook deliveries will be rejected"
        );
    }

    let email = Arc::new(PostmarkEmailSender::new(
        http_client::try_build_client()?,
        config.postmark_api_url.clone(),
    ));

    let auth_handler = Arc::new(CentralAuthHandler::new(
        http_client::try_build_proxy_client()?,
        config.auth_service_url.clone(),
    ));

    let webhook_use_cases = WebhookUseCases::new(
        email,
        config.postmark_api_token.clone(),
        config.email_from.clone(),
    );

    Ok(AppState {
        config: Arc::new(config),
        webhook_use_cases: Arc::new(webhook_use_cases),
        auth_handler,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mauth_portal=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped when the file can't be created.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(Mutex::new(file))
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
