//! HTTP request handlers.
//!
//! Controllers check access through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service params and service results back into DTOs. Every handler
//! carries a `utoipa::path` annotation; the router collects them into the OpenAPI document.

pub mod admin;
pub mod auth;
pub mod feedback;
pub mod me;
pub mod param;
pub mod phrase;
pub mod profile;
