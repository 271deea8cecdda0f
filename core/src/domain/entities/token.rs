//! Token claims for RS256-signed access tokens.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::SessionId;

/// Access token validity window (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "taskgate";

/// Subject marking a token as an access token
pub const ACCESS_TOKEN_SUBJECT: &str = "access_token";

/// Private claim holding the session identifier
pub const SESSION_ID_CLAIM: &str = "sid";

/// Private claim holding the role
pub const ROLE_CLAIM: &str = "role";

/// Private claim holding the display username
pub const USER_NAME_CLAIM: &str = "user_name";

/// Claims structure for JWT payload
///
/// The serialized field names are part of the on-wire contract and must
/// match the `*_CLAIM` constants above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Subject, always [`ACCESS_TOKEN_SUBJECT`]
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Key of the session record backing this token
    #[serde(rename = "sid")]
    pub session_id: String,

    #[serde(rename = "role")]
    pub role: String,

    #[serde(rename = "user_name")]
    pub user_name: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `issuer` - Value of the `iss` claim
    /// * `session_id` - Session record the token points at
    /// * `role` - Role of the authenticated user
    /// * `user_name` - Display name of the authenticated user
    /// * `issued_at` - Issuance instant, taken from the injected clock
    /// * `validity` - Lifetime of the token
    pub fn new_access_token(
        issuer: &str,
        session_id: &SessionId,
        role: &str,
        user_name: &str,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        let expiry = issued_at + validity;

        Self {
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            sub: ACCESS_TOKEN_SUBJECT.to_string(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            session_id: session_id.as_str().to_string(),
            role: role.to_string(),
            user_name: user_name.to_string(),
        }
    }

    /// `true` once `now` has reached the expiration timestamp
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}
