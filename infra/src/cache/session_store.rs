//! Redis-backed session store
//!
//! Each session record is a plain string key holding the decimal user id,
//! written with `SET EX` so Redis expires it in step with the token.

use async_trait::async_trait;
use tracing::{debug, warn};

use tg_core::{SessionId, SessionStore, StoreError, UserId};

use crate::cache::{CacheConfig, RedisClient};

/// Key under which a session record is stored, honoring the configured prefix
pub fn session_key(config: &CacheConfig, session_id: &SessionId) -> String {
    config.make_key(&format!("session:{}", session_id))
}

/// [`SessionStore`] implementation on top of [`RedisClient`]
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// # Arguments
    /// * `client` - Connected Redis client
    /// * `ttl_seconds` - Record lifetime; should equal the access token lifetime
    pub fn new(client: RedisClient, ttl_seconds: u64) -> Self {
        Self { client, ttl_seconds }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Remaining lifetime of a record as reported by Redis
    pub async fn remaining_ttl(&self, session_id: &SessionId) -> Result<Option<i64>, StoreError> {
        Ok(self.client.ttl(&self.key(session_id)).await?)
    }

    fn key(&self, session_id: &SessionId) -> String {
        session_key(self.client.config(), session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, session_id: &SessionId, user_id: UserId) -> Result<(), StoreError> {
        self.client
            .set_with_expiry(&self.key(session_id), &user_id.to_string(), self.ttl_seconds)
            .await?;
        Ok(())
    }

    async fn load(&self, session_id: &SessionId) -> Result<UserId, StoreError> {
        let value = self
            .client
            .get(&self.key(session_id))
            .await?
            .ok_or(StoreError::NotFound)?;

        value.parse::<UserId>().map_err(|e| {
            warn!(error = %e, "Session record holds a malformed user id");
            StoreError::Unavailable {
                message: "malformed session record".to_string(),
            }
        })
    }

    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError> {
        if self.client.delete(&self.key(session_id)).await? {
            debug!("Session record deleted");
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}
