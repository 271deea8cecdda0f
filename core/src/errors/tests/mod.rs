//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, StoreError, TokenError};

#[test]
fn test_store_not_found_maps_to_session_not_found() {
    let err: TokenError = StoreError::NotFound.into();
    assert_eq!(err, TokenError::SessionNotFound);
}

#[test]
fn test_store_unavailable_stays_distinct() {
    let err: TokenError = StoreError::Unavailable {
        message: "connection refused".to_string(),
    }
    .into();
    assert_eq!(
        err,
        TokenError::StoreUnavailable {
            message: "connection refused".to_string()
        }
    );
    assert_eq!(err.code(), "STORE_UNAVAILABLE");
}

#[test]
fn test_authentication_failure_classification() {
    assert!(DomainError::Token(TokenError::TokenExpired).is_authentication_failure());
    assert!(DomainError::Token(TokenError::SessionNotFound).is_authentication_failure());
    assert!(DomainError::Auth(AuthError::InvalidCredentials).is_authentication_failure());

    let degraded = DomainError::Token(TokenError::StoreUnavailable {
        message: "timeout".to_string(),
    });
    assert!(!degraded.is_authentication_failure());
    assert!(!DomainError::Store(StoreError::NotFound).is_authentication_failure());
}

#[test]
fn test_transparent_display() {
    let err: DomainError = TokenError::CredentialMissing.into();
    assert_eq!(err.to_string(), "Missing or malformed bearer credential");
}
