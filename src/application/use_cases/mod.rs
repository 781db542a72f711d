pub mod auth_proxy;
pub mod email;
pub mod webhook;
