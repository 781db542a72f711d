use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::auth_request::RequestLocals;

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Attach `RequestLocals` to the request so downstream handlers (the auth
/// proxy in particular) can hand request-scoped context to their callee.
pub async fn request_locals_middleware(mut request: Request, next: Next) -> Response {
    // Absent when the server is not started with connect info (tests).
    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let locals = RequestLocals::new(client_addr);
    tracing::Span::current().record("request_id", tracing::field::display(locals.request_id));
    request.extensions_mut().insert(locals);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&locals.request_id.to_string()) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}
