//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound adapters (Postmark, the auth central service) build their
//! `reqwest::Client` here rather than constructing one directly.

use reqwest::{Client, redirect};
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with default timeouts.
pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
}

/// Build a client for transparent proxying.
///
/// Redirects are handed back to the caller instead of followed, so the
/// browser sees the upstream `Location` and `Set-Cookie` headers.
pub fn try_build_proxy_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .redirect(redirect::Policy::none())
        .build()
}
