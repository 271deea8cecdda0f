//! Route handlers
//!
//! - `auth` - login and logout
//! - `admin` - admin-only scope behind the Role Guard
//! - `me` - the caller's own identity
//! - `health` - liveness probe

pub mod admin;
pub mod auth;
pub mod health;
pub mod me;
