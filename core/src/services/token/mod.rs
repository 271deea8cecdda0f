//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - RS256 access token issuance bound to a fresh session record
//! - Request-time verification against the public key, the clock and the session store
//! - Session revocation (logout)
//! - RS256 key loading from embedded or provisioned PEM material

mod config;
mod key_manager;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use key_manager::{Rs256KeyManager, EMBEDDED_PRIVATE_KEY_PEM, EMBEDDED_PUBLIC_KEY_PEM};
pub use service::{extract_bearer_token, TokenService};
pub use traits::{TokenIssuer, TokenVerifier};
