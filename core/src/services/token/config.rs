//! Configuration for the token service

use chrono::Duration;
use tg_shared::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// Value of the `iss` claim, also enforced on verification
    pub issuer: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            issuer: JWT_ISSUER.to_string(),
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
        }
    }
}

impl TokenServiceConfig {
    pub fn from_jwt_config(jwt: &JwtConfig) -> Self {
        Self {
            issuer: jwt.issuer.clone(),
            access_token_expiry_seconds: jwt.access_token_expiry,
        }
    }

    /// Validity window of an access token
    pub fn access_token_validity(&self) -> Duration {
        Duration::seconds(self.access_token_expiry_seconds)
    }

    /// Session records should live exactly as long as the token
    pub fn session_ttl_seconds(&self) -> u64 {
        self.access_token_validity().num_seconds().max(0) as u64
    }
}
