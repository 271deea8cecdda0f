//! HTTP layer of the TaskGate server
//!
//! Exposes the Access Guard ([`middleware::JwtAuth`]), the Role Guard
//! ([`middleware::RequireRole`]) and the routes built on top of them.

pub mod app;
pub mod dto;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
