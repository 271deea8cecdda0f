//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, StoreError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Whether this error denies a credential, as opposed to a service fault
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Auth(_)
                | DomainError::Token(
                    TokenError::CredentialMissing
                        | TokenError::InvalidSignature
                        | TokenError::TokenExpired
                        | TokenError::SessionNotFound
                )
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
