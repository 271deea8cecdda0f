//! Mock implementation of SessionStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::session::SessionId;
use crate::domain::entities::user::UserId;
use crate::errors::StoreError;

use super::r#trait::SessionStore;

/// Mock session store counting calls, with switchable failures
#[derive(Default)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, UserId>>>,
    save_calls: AtomicUsize,
    load_calls: AtomicUsize,
    remove_calls: AtomicUsize,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` report the store as unavailable
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent `load` report the store as unavailable
    pub fn fail_loads(&self) {
        self.fail_loads.store(true, Ordering::SeqCst);
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }

    /// Total number of store round-trips
    pub fn total_calls(&self) -> usize {
        self.save_calls() + self.load_calls() + self.remove_calls()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Look up a binding without counting the call
    pub async fn peek(&self, session_id: &SessionId) -> Option<UserId> {
        self.sessions.read().await.get(session_id).copied()
    }

    fn unavailable() -> StoreError {
        StoreError::Unavailable {
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn save(&self, session_id: &SessionId, user_id: UserId) -> Result<(), StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.sessions.write().await.insert(session_id.clone(), user_id);
        Ok(())
    }

    async fn load(&self, session_id: &SessionId) -> Result<UserId, StoreError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.sessions
            .read()
            .await
            .get(session_id)
            .copied()
            .ok_or(StoreError::NotFound)
    }

    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
