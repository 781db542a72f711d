pub mod auth_request;
pub mod email;
pub mod webhook;
