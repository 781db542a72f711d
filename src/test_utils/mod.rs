//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - In-memory doubles for the email sender and auth handler ports
//! - `TestAppStateBuilder` for constructing `AppState` around those doubles
//! - `spawn_server` for standing up throwaway upstream services

mod app_state_builder;
mod auth_mocks;
mod email_mocks;

pub use app_state_builder::*;
pub use auth_mocks::*;
pub use email_mocks::*;

use std::net::SocketAddr;

use axum::Router;

/// Serve `app` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
