use std::net::SocketAddr;

use axum::{
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use uuid::Uuid;

/// Request-scoped context attached by the locals middleware and handed to
/// the auth handler alongside each proxied request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocals {
    pub request_id: Uuid,
    pub client_addr: Option<SocketAddr>,
}

impl RequestLocals {
    pub fn new(client_addr: Option<SocketAddr>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            client_addr,
        }
    }
}

/// Owned snapshot of an inbound `/auth/*` request.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Response produced by the auth handler, returned to the client as-is.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}
