//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// PEM file holding the RS256 private key; embedded key when unset
    #[serde(default)]
    pub private_key_path: Option<String>,

    /// PEM file holding the RS256 public key; embedded key when unset
    #[serde(default)]
    pub public_key_path: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_token_expiry: 1800, // 30 minutes
            issuer: String::from("taskgate"),
            private_key_path: None,
            public_key_path: None,
        }
    }
}

impl JwtConfig {
    /// Point the signer and verifier at PEM files on disk
    pub fn with_key_paths(
        mut self,
        private_key_path: impl Into<String>,
        public_key_path: impl Into<String>,
    ) -> Self {
        self.private_key_path = Some(private_key_path.into());
        self.public_key_path = Some(public_key_path.into());
        self
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Role required by the admin scope
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            admin_role: default_admin_role(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);

        Self {
            jwt: JwtConfig {
                access_token_expiry,
                issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
                private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH").ok(),
                public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH").ok(),
            },
            admin_role: std::env::var("AUTH_ADMIN_ROLE").unwrap_or_else(|_| default_admin_role()),
        }
    }
}

fn default_admin_role() -> String {
    String::from("admin")
}
