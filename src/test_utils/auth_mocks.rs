use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::auth_request::{AuthRequest, AuthResponse, RequestLocals},
    use_cases::auth_proxy::AuthHandler,
};

#[derive(Debug, Clone)]
pub struct AuthCall {
    pub slug: String,
    pub request: AuthRequest,
    pub locals: RequestLocals,
}

/// Auth handler double that records calls and replays a canned response.
/// `failing()` builds one that reports the auth service as unreachable.
pub struct RecordingAuthHandler {
    response: Option<AuthResponse>,
    calls: Mutex<Vec<AuthCall>>,
}

impl RecordingAuthHandler {
    pub fn new(response: AuthResponse) -> Self {
        Self {
            response: Some(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse> {
        self.calls.lock().unwrap().push(AuthCall {
            slug: slug.to_string(),
            request,
            locals: *locals,
        });
        self.response
            .clone()
            .ok_or_else(|| AppError::Upstream("connection refused".into()))
    }
}

#[async_trait]
impl AuthHandler for RecordingAuthHandler {
    async fn handle_get(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse> {
        self.record(slug, request, locals)
    }

    async fn handle_post(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse> {
        self.record(slug, request, locals)
    }
}
