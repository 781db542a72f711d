pub mod auth;
pub mod webhooks;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/public/webhooks", webhooks::router())
        .merge(auth::router())
}
