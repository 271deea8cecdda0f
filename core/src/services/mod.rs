//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::UserAuthenticator;
pub use token::{
    extract_bearer_token, Rs256KeyManager, TokenIssuer, TokenService, TokenServiceConfig,
    TokenVerifier,
};
