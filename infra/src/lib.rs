//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the TaskGate core consumes:
//!
//! - **Cache**: Redis client with retry/backoff and the Redis-backed
//!   [`SessionStore`](tg_core::SessionStore)
//! - **Users**: a seeded, development-only user directory implementing
//!   [`UserAuthenticator`](tg_core::UserAuthenticator)

/// Cache module - Redis client and the session store built on it
pub mod cache;

/// Users module - login collaborator implementations
pub mod users;

pub use cache::{RedisClient, RedisSessionStore};
pub use users::SeededUserDirectory;

use tg_core::StoreError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(err: InfrastructureError) -> Self {
        StoreError::Unavailable {
            message: err.to_string(),
        }
    }
}
