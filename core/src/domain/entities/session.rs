//! Session identifiers and the verified session handed to request handlers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::token::Claims;
use super::user::UserId;

/// Server-generated key of a session record
///
/// Minted fresh from a random UUID v4 on every issuance; there is no way
/// to derive one from a user identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reads a session identifier back out of a token claim
    ///
    /// Returns `None` unless the value is a well-formed UUID, so arbitrary
    /// strings never reach the store as lookup keys.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(|uuid| Self(uuid.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of a successful verification
///
/// `user_id` comes from the session store lookup, which is the only
/// source of truth for the principal; the token carries no user id claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub user_id: UserId,
    /// Parsed form of the token's `sid` claim
    pub session_id: SessionId,
    pub claims: Claims,
}

impl AuthenticatedSession {
    pub fn role(&self) -> &str {
        &self.claims.role
    }

    pub fn user_name(&self) -> &str {
        &self.claims.user_name
    }
}
