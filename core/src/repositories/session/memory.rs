//! In-process session store

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::domain::entities::session::SessionId;
use crate::domain::entities::user::UserId;
use crate::errors::StoreError;

use super::r#trait::SessionStore;

#[derive(Debug, Clone, Copy)]
struct Entry {
    user_id: UserId,
    expires_at: Option<DateTime<Utc>>,
}

/// Session store backed by a map guarded by an async lock
///
/// Constructed explicitly and handed to the token service; there is no
/// process-wide instance. With [`InMemorySessionStore::with_ttl`] entries
/// expire against the injected clock, mirroring store-side TTL in Redis.
#[derive(Clone)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<SessionId, Entry>>>,
    ttl: Option<(Arc<dyn Clock>, Duration)>,
}

impl InMemorySessionStore {
    /// A store whose records live until removed
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: None,
        }
    }

    /// A store whose records expire `ttl` after they were saved
    pub fn with_ttl(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: Some((clock, ttl)),
        }
    }

    /// Number of records currently held, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn is_live(&self, entry: &Entry) -> bool {
        match (&self.ttl, entry.expires_at) {
            (Some((clock, _)), Some(expires_at)) => clock.now() < expires_at,
            _ => true,
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("ttl", &self.ttl.as_ref().map(|(_, ttl)| *ttl))
            .finish()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session_id: &SessionId, user_id: UserId) -> Result<(), StoreError> {
        let expires_at = self.ttl.as_ref().map(|(clock, ttl)| clock.now() + *ttl);
        let mut entries = self.entries.write().await;
        entries.insert(session_id.clone(), Entry { user_id, expires_at });
        Ok(())
    }

    async fn load(&self, session_id: &SessionId) -> Result<UserId, StoreError> {
        let entry = {
            let entries = self.entries.read().await;
            entries.get(session_id).copied()
        };

        match entry {
            Some(entry) if self.is_live(&entry) => Ok(entry.user_id),
            Some(_) => {
                // Lazily drop the expired record
                self.entries.write().await.remove(session_id);
                Err(StoreError::NotFound)
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        match entries.remove(session_id) {
            Some(entry) if self.is_live(&entry) => Ok(()),
            _ => Err(StoreError::NotFound),
        }
    }
}
