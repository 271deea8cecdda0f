//! Shared configuration and response types for the TaskGate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by the HTTP layer

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
pub use types::ErrorResponse;
