//! Main token service implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::entities::session::{AuthenticatedSession, SessionId};
use crate::domain::entities::token::{Claims, ACCESS_TOKEN_SUBJECT};
use crate::domain::entities::user::User;
use crate::errors::{StoreError, TokenError};
use crate::repositories::SessionStore;

use super::config::TokenServiceConfig;
use super::key_manager::Rs256KeyManager;
use super::traits::{TokenIssuer, TokenVerifier};

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from an `Authorization` header value
///
/// Accepts exactly `Bearer <token>`: the scheme is case-sensitive, followed
/// by a single space and a non-empty token without whitespace.
pub fn extract_bearer_token(authorization: Option<&str>) -> Result<&str, TokenError> {
    let token = authorization
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(TokenError::CredentialMissing)?;

    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(TokenError::CredentialMissing);
    }

    Ok(token)
}

/// Issuer and verifier of RS256 access tokens backed by a session store
///
/// The service holds no mutable state of its own. Everything that spans
/// requests lives in the injected [`SessionStore`], so one instance can be
/// shared across workers without locking.
pub struct TokenService<S: SessionStore, C: Clock = SystemClock> {
    pub(crate) store: S,
    clock: C,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<S: SessionStore, C: Clock> TokenService<S, C> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Session store holding `session_id -> user_id` bindings
    /// * `clock` - Time source for issuance and expiry checks
    /// * `key_manager` - RS256 key pair
    /// * `config` - Issuer and token lifetime
    pub fn new(
        store: S,
        clock: C,
        key_manager: Rs256KeyManager,
        config: TokenServiceConfig,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.sub = Some(ACCESS_TOKEN_SUBJECT.to_string());
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        // Expiry is checked against the injected clock instead
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            store,
            clock,
            encoding_key: key_manager.encoding_key().clone(),
            decoding_key: key_manager.decoding_key().clone(),
            config,
            validation,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues an access token for `user` at the clock's current time
    pub async fn issue_token(&self, user: &User) -> Result<String, TokenError> {
        self.issue_token_at(user, self.clock.now()).await
    }

    /// Issues an access token for `user` as of `now`
    ///
    /// A fresh session identifier is bound to the user in the store before
    /// anything is signed. A store failure aborts issuance; a signing failure
    /// removes the fresh record again. No token is returned on any error path.
    pub async fn issue_token_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, TokenError> {
        let session_id = SessionId::generate();

        self.store.save(&session_id, user.id).await.map_err(|e| {
            warn!(user_id = %user.id, error = %e, "Failed to persist session record");
            TokenError::from(e)
        })?;

        let claims = Claims::new_access_token(
            &self.config.issuer,
            &session_id,
            &user.role,
            &user.name,
            now,
            self.config.access_token_validity(),
        );

        match self.encode_jwt(&claims) {
            Ok(token) => {
                info!(user_id = %user.id, role = %user.role, "Issued access token");
                debug!(session_id = %session_id, exp = claims.exp, "Session record bound");
                Ok(token)
            }
            Err(err) => {
                if let Err(e) = self.store.remove(&session_id).await {
                    warn!(error = %e, "Failed to discard session record after signing failure");
                }
                Err(err)
            }
        }
    }

    /// Verifies the raw `Authorization` header of a request
    pub async fn verify_authorization(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedSession, TokenError> {
        let token = extract_bearer_token(authorization)?;
        self.verify_token(token).await
    }

    /// Verifies a bare token at the clock's current time
    pub async fn verify_token(&self, token: &str) -> Result<AuthenticatedSession, TokenError> {
        self.verify_token_at(token, self.clock.now()).await
    }

    /// Verifies a bare token as of `now`
    ///
    /// Signature, algorithm, issuer and subject are checked first, then
    /// expiry. The session store is only consulted once the token is
    /// self-consistent. The store is never written to.
    pub async fn verify_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedSession, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Rejected token");
                TokenError::InvalidSignature
            })?
            .claims;

        if claims.is_expired_at(now) {
            debug!(exp = claims.exp, "Rejected expired token");
            return Err(TokenError::TokenExpired);
        }

        let session_id = SessionId::parse(&claims.session_id).ok_or_else(|| {
            debug!("Token carries a malformed session identifier");
            TokenError::SessionNotFound
        })?;

        let user_id = match self.store.load(&session_id).await {
            Ok(user_id) => user_id,
            Err(StoreError::NotFound) => {
                debug!(session_id = %session_id, "Session record not found");
                return Err(TokenError::SessionNotFound);
            }
            Err(e) => {
                warn!(error = %e, "Session store lookup failed");
                return Err(e.into());
            }
        };

        Ok(AuthenticatedSession {
            user_id,
            session_id,
            claims,
        })
    }

    /// Removes a session record, revoking every token that references it
    ///
    /// Idempotent: an already absent record counts as revoked.
    pub async fn revoke_session(&self, session_id: &SessionId) -> Result<(), TokenError> {
        match self.store.remove(session_id).await {
            Ok(()) => {
                info!("Session revoked");
                Ok(())
            }
            Err(StoreError::NotFound) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Failed to revoke session");
                Err(e.into())
            }
        }
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(Algorithm::RS256);
        encode(&header, claims, &self.encoding_key).map_err(|e| TokenError::TokenGenerationFailed {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<S: SessionStore, C: Clock> TokenIssuer for TokenService<S, C> {
    async fn issue_token(&self, user: &User) -> Result<String, TokenError> {
        TokenService::issue_token(self, user).await
    }

    async fn revoke_session(&self, session_id: &SessionId) -> Result<(), TokenError> {
        TokenService::revoke_session(self, session_id).await
    }
}

#[async_trait]
impl<S: SessionStore, C: Clock> TokenVerifier for TokenService<S, C> {
    async fn verify_authorization(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedSession, TokenError> {
        TokenService::verify_authorization(self, authorization).await
    }
}
