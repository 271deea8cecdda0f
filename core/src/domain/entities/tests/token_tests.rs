//! Unit tests for token entities

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::session::SessionId;
use crate::domain::entities::token::{
    Claims, ACCESS_TOKEN_EXPIRY_MINUTES, ACCESS_TOKEN_SUBJECT, JWT_ISSUER, ROLE_CLAIM,
    SESSION_ID_CLAIM, USER_NAME_CLAIM,
};

fn issued_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

fn sample_claims() -> Claims {
    Claims::new_access_token(
        JWT_ISSUER,
        &SessionId::generate(),
        "test",
        "test_user",
        issued_at(),
        Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
    )
}

#[test]
fn test_access_token_claims() {
    let session_id = SessionId::generate();
    let claims = Claims::new_access_token(
        JWT_ISSUER,
        &session_id,
        "test",
        "test_user",
        issued_at(),
        Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
    );

    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.sub, ACCESS_TOKEN_SUBJECT);
    assert_eq!(claims.session_id, session_id.as_str());
    assert_eq!(claims.role, "test");
    assert_eq!(claims.user_name, "test_user");
    assert_eq!(claims.iat, issued_at().timestamp());
    assert_eq!(claims.exp - claims.iat, 30 * 60);
    assert_eq!(claims.issued_at(), Some(issued_at()));
    assert_eq!(claims.expires_at(), Some(issued_at() + Duration::minutes(30)));
}

#[test]
fn test_each_token_gets_unique_jti() {
    let a = sample_claims();
    let b = sample_claims();
    assert_ne!(a.jti, b.jti);
    assert!(uuid::Uuid::parse_str(&a.jti).is_ok());
}

#[test]
fn test_expiry_boundary() {
    let claims = sample_claims();
    let window = Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES);

    assert!(!claims.is_expired_at(issued_at()));
    assert!(!claims.is_expired_at(issued_at() + window - Duration::seconds(1)));
    assert!(claims.is_expired_at(issued_at() + window));
    assert!(claims.is_expired_at(issued_at() + window + Duration::seconds(1)));
}

#[test]
fn test_claim_names_on_the_wire() {
    let claims = sample_claims();
    let json = serde_json::to_value(&claims).unwrap();
    let object = json.as_object().unwrap();

    for key in ["iss", "jti", "sub", "iat", "exp", SESSION_ID_CLAIM, ROLE_CLAIM, USER_NAME_CLAIM] {
        assert!(object.contains_key(key), "missing claim {key}");
    }
    assert_eq!(object.len(), 8);
    assert_eq!(json[ROLE_CLAIM], "test");
    assert_eq!(json[USER_NAME_CLAIM], "test_user");
    assert_eq!(json[SESSION_ID_CLAIM], claims.session_id.as_str());
}

#[test]
fn test_claims_deserialization() {
    let claims = sample_claims();
    let encoded = serde_json::to_string(&claims).unwrap();
    let decoded: Claims = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, claims);
}
