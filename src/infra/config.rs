use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

use crate::infra::error::InfraError;

pub const DEFAULT_POSTMARK_API_URL: &str = "https://api.postmarkapp.com/email";
pub const DEFAULT_CONTENT_SECURITY_POLICY: &str = "default-src 'self'; frame-ancestors 'none'";

/// Paths served straight from disk, bypassing the request-locals middleware.
pub const DEFAULT_STATIC_INCLUDE: &[&str] = &["/favicon.ico", "/robots.txt", "/.well-known/*"];

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the auth provider's central service; `/auth/*` is forwarded here.
    pub auth_service_url: Url,
    pub postmark_api_url: Url,
    /// Optional at startup. Checked on every webhook so a missing token
    /// yields a 500 rather than a crash loop.
    pub postmark_api_token: Option<SecretString>,
    /// Verified sender, e.g. "App Name <no-reply@example.com>".
    pub email_from: Option<String>,
    pub security_headers: SecurityHeaders,
    pub static_assets: StaticAssets,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 4321)),
        );
        let auth_service_url =
            required_url("AUTH_SERVICE_URL", std::env::var("AUTH_SERVICE_URL"))?;
        let postmark_api_url: Url = match std::env::var("POSTMARK_API_URL") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| InfraError::ConfigInvalid { var: "POSTMARK_API_URL" })?,
            Err(_) => Url::parse(DEFAULT_POSTMARK_API_URL)
                .map_err(|_| InfraError::ConfigInvalid { var: "POSTMARK_API_URL" })?,
        };
        let postmark_api_token = std::env::var("POSTMARK_API_TOKEN")
            .ok()
            .map(|t| SecretString::new(t.into()));
        let email_from = std::env::var("EMAIL_FROM").ok();

        let csp: String = get_env_default(
            "CONTENT_SECURITY_POLICY",
            DEFAULT_CONTENT_SECURITY_POLICY.to_string(),
        );
        let security_headers = SecurityHeaders {
            content_security_policy: csp.parse().map_err(|_| InfraError::ConfigInvalid {
                var: "CONTENT_SECURITY_POLICY",
            })?,
            ..SecurityHeaders::default()
        };

        let static_assets = StaticAssets {
            dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
            ..StaticAssets::default()
        };

        Ok(Self {
            bind_addr,
            auth_service_url,
            postmark_api_url,
            postmark_api_token,
            email_from,
            security_headers,
            static_assets,
        })
    }
}

fn required_url(
    var: &'static str,
    raw: Result<String, std::env::VarError>,
) -> Result<Url, InfraError> {
    let raw = raw.map_err(|_| InfraError::ConfigMissing { var })?;
    raw.parse().map_err(|_| InfraError::ConfigInvalid { var })
}

/// Response headers applied to everything the portal serves.
#[derive(Clone, Debug)]
pub struct SecurityHeaders {
    pub content_security_policy: HeaderValue,
    pub content_type_options: HeaderValue,
    pub frame_options: HeaderValue,
    pub referrer_policy: HeaderValue,
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self {
            content_security_policy: HeaderValue::from_static(DEFAULT_CONTENT_SECURITY_POLICY),
            content_type_options: HeaderValue::from_static("nosniff"),
            frame_options: HeaderValue::from_static("DENY"),
            referrer_policy: HeaderValue::from_static("strict-origin-when-cross-origin"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaticRoute {
    File(String),
    /// A `/prefix/*` pattern; everything below `prefix` is served.
    Dir(String),
}

#[derive(Clone, Debug)]
pub struct StaticAssets {
    /// No static routes are mounted when unset.
    pub dir: Option<PathBuf>,
    pub include: Vec<String>,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            dir: None,
            include: DEFAULT_STATIC_INCLUDE.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl StaticAssets {
    pub fn routes(&self) -> Vec<StaticRoute> {
        self.include
            .iter()
            .filter(|p| p.starts_with('/') && p.len() > 1)
            .map(|p| match p.strip_suffix("/*") {
                Some(prefix) => StaticRoute::Dir(prefix.to_string()),
                None => StaticRoute::File(p.clone()),
            })
            .collect()
    }
}
