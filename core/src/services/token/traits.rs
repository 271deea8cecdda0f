//! Capabilities the HTTP layer consumes from the token service

use async_trait::async_trait;

use crate::domain::entities::session::{AuthenticatedSession, SessionId};
use crate::domain::entities::user::User;
use crate::errors::TokenError;

/// Issues tokens at login and revokes them at logout
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Mint a session record for `user` and return the signed token
    async fn issue_token(&self, user: &User) -> Result<String, TokenError>;

    /// Remove the session record, invalidating every token that references it
    async fn revoke_session(&self, session_id: &SessionId) -> Result<(), TokenError>;
}

/// Verifies the credential carried by an inbound request
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify the raw `Authorization` header value, if any
    async fn verify_authorization(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedSession, TokenError>;
}
