use async_trait::async_trait;
use axum::http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{
        CONNECTION, CONTENT_LENGTH, HOST, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, TE, TRAILER,
        TRANSFER_ENCODING, UPGRADE,
    },
};
use reqwest::Client;
use tracing::{instrument, warn};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::auth_request::{AuthRequest, AuthResponse, RequestLocals},
    use_cases::auth_proxy::AuthHandler,
};

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_REQUEST_ID: &str = "x-request-id";

const HOP_BY_HOP: [HeaderName; 8] = [
    CONNECTION,
    CONTENT_LENGTH,
    PROXY_AUTHENTICATE,
    PROXY_AUTHORIZATION,
    TE,
    TRAILER,
    TRANSFER_ENCODING,
    UPGRADE,
];

/// Forwards `/auth/*` to the auth provider's central service.
#[derive(Clone)]
pub struct CentralAuthHandler {
    client: Client,
    base_url: Url,
}

impl CentralAuthHandler {
    /// `client` must not follow redirects; see `http_client::try_build_proxy_client`.
    pub fn new(client: Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    fn target_url(&self, slug: &str, query: Option<&str>) -> AppResult<Url> {
        if slug.split('/').any(|segment| segment == "..") {
            return Err(AppError::InvalidInput("Invalid auth path".into()));
        }
        let mut url = self
            .base_url
            .join(&format!("auth/{}", slug.trim_start_matches('/')))
            .map_err(|e| AppError::InvalidInput(format!("Invalid auth path: {e}")))?;
        url.set_query(query);
        Ok(url)
    }

    #[instrument(
        skip_all,
        fields(method = %request.method, slug = %slug, request_id = %locals.request_id)
    )]
    async fn forward(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse> {
        let url = self.target_url(slug, request.uri.query())?;

        let mut headers = strip_hop_by_hop(&request.headers);
        headers.remove(HOST);
        if let Some(host) = request.headers.get(HOST) {
            headers.insert(HeaderName::from_static(X_FORWARDED_HOST), host.clone());
        }
        if let Some(addr) = locals.client_addr {
            if let Ok(value) = HeaderValue::from_str(&addr.ip().to_string()) {
                headers.append(HeaderName::from_static(X_FORWARDED_FOR), value);
            }
        }
        if let Ok(value) = HeaderValue::from_str(&locals.request_id.to_string()) {
            headers.insert(HeaderName::from_static(X_REQUEST_ID), value);
        }

        let upstream = self
            .client
            .request(request.method, url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Auth service request failed");
                AppError::Upstream(e.to_string())
            })?;

        let status = upstream.status();
        let headers = strip_hop_by_hop(upstream.headers());
        let body = upstream
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        Ok(AuthResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl AuthHandler for CentralAuthHandler {
    async fn handle_get(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse> {
        self.forward(slug, request, locals).await
    }

    async fn handle_post(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse> {
        self.forward(slug, request, locals).await
    }
}

/// Copy `headers` without connection-scoped entries, including any named
/// by the `Connection` header itself. Length is dropped because the body
/// is re-framed on each hop.
fn strip_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    let named_by_connection: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let hop_by_hop = HOP_BY_HOP.contains(name)
            || name.as_str() == "keep-alive"
            || named_by_connection.iter().any(|n| n == name.as_str());
        if !hop_by_hop {
            out.append(name.clone(), value.clone());
        }
    }
    out
}
