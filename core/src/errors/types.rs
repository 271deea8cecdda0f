//! Error types for token issuance, verification and session storage
//!
//! Messages are deliberately generic. The HTTP layer maps every variant to
//! its own response body and never forwards these strings to clients.

use thiserror::Error;

/// Token lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Key material could not be read or parsed; fatal at startup
    #[error("Invalid key configuration: {message}")]
    Configuration { message: String },

    /// No `Authorization` header, or not exactly `Bearer <token>`
    #[error("Missing or malformed bearer credential")]
    CredentialMissing,

    /// Malformed structure, foreign key or tampered payload/signature
    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    /// The session record behind the token was revoked or evicted
    #[error("Session not found")]
    SessionNotFound,

    /// The session store could not be reached while verifying
    #[error("Session store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Token generation failed: {message}")]
    TokenGenerationFailed { message: String },
}

/// Errors reported by a session store implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session record not found")]
    NotFound,

    /// Transient infrastructure failure
    #[error("Session store unavailable: {message}")]
    Unavailable { message: String },
}

/// Login collaborator errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl TokenError {
    /// Stable code used in logs and metrics labels
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Configuration { .. } => "CONFIGURATION_ERROR",
            TokenError::CredentialMissing => "CREDENTIAL_MISSING",
            TokenError::InvalidSignature => "SIGNATURE_INVALID",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::SessionNotFound => "SESSION_NOT_FOUND",
            TokenError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            TokenError::TokenGenerationFailed { .. } => "TOKEN_GENERATION_FAILED",
        }
    }
}

impl From<StoreError> for TokenError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => TokenError::SessionNotFound,
            StoreError::Unavailable { message } => TokenError::StoreUnavailable { message },
        }
    }
}
