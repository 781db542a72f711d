use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    domain::entities::auth_request::{AuthRequest, AuthResponse, RequestLocals},
};

/// External handler that owns everything under `/auth/*`.
///
/// `slug` is the path after `/auth/`. Implementations return the response
/// that should reach the client untouched.
#[async_trait]
pub trait AuthHandler: Send + Sync {
    async fn handle_get(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse>;

    async fn handle_post(
        &self,
        slug: &str,
        request: AuthRequest,
        locals: &RequestLocals,
    ) -> AppResult<AuthResponse>;
}
