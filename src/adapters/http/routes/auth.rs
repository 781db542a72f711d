use axum::{
    Router,
    body::to_bytes,
    extract::{Path, Request, State},
    http::Method,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::auth_request::{AuthRequest, AuthResponse, RequestLocals},
};

/// Largest body forwarded to the auth service.
const MAX_AUTH_BODY_BYTES: usize = 1024 * 1024;

/// Mounted at the root rather than nested: a `{*slug}` wildcard never
/// matches an empty tail, so `/auth` and `/auth/` get their own routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", get(proxy_root).post(proxy_root))
        .route("/auth/", get(proxy_root).post(proxy_root))
        .route("/auth/{*slug}", get(proxy_slug).post(proxy_slug))
}

/// GET|POST /auth and /auth/
async fn proxy_root(State(app_state): State<AppState>, request: Request) -> AppResult<Response> {
    proxy(&app_state, "", request).await
}

/// GET|POST /auth/{*slug}
async fn proxy_slug(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
    request: Request,
) -> AppResult<Response> {
    proxy(&app_state, &slug, request).await
}

async fn proxy(app_state: &AppState, slug: &str, request: Request) -> AppResult<Response> {
    let is_post = request.method() == Method::POST;
    let (request, locals) = snapshot(request).await?;
    let handler = &app_state.auth_handler;
    let response = if is_post {
        handler.handle_post(slug, request, &locals).await?
    } else {
        handler.handle_get(slug, request, &locals).await?
    };
    Ok(into_response(response))
}

async fn snapshot(request: Request) -> AppResult<(AuthRequest, RequestLocals)> {
    let (parts, body) = request.into_parts();
    let locals = parts
        .extensions
        .get::<RequestLocals>()
        .copied()
        .unwrap_or_else(|| RequestLocals::new(None));
    let body = to_bytes(body, MAX_AUTH_BODY_BYTES)
        .await
        .map_err(|e| AppError::InvalidInput(format!("Unreadable request body: {e}")))?;

    Ok((
        AuthRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        },
        locals,
    ))
}

fn into_response(response: AuthResponse) -> Response {
    (response.status, response.headers, response.body).into_response()
}
