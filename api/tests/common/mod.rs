//! Shared wiring for the HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use tg_api::AppState;
use tg_core::{
    FixedClock, InMemorySessionStore, Rs256KeyManager, SessionId, SessionStore, StoreError,
    TokenService, TokenServiceConfig, User, UserId,
};
use tg_infra::SeededUserDirectory;

pub type TestTokenService<S = InMemorySessionStore> = TokenService<S, FixedClock>;

pub const TEST_PASSWORD: &str = "hunter2";

pub fn member() -> User {
    User::new(20, "test_user", "test")
}

pub fn admin() -> User {
    User::new(1, "root", "admin")
}

/// Token service on the embedded keys, pinned at 2023-01-01T00:00:00Z + `offset`
pub fn token_service_at<S: SessionStore>(store: S, offset: Duration) -> Arc<TestTokenService<S>> {
    Arc::new(TokenService::new(
        store,
        FixedClock::default().advanced_by(offset),
        Rs256KeyManager::embedded().expect("embedded keys"),
        TokenServiceConfig::default(),
    ))
}

pub fn directory() -> SeededUserDirectory {
    SeededUserDirectory::new()
        .with_user(member().id, member().name, TEST_PASSWORD, member().role)
        .with_user(admin().id, admin().name, TEST_PASSWORD, admin().role)
}

/// App state where issuing and verifying share one service
pub fn state<S: SessionStore + 'static>(service: Arc<TestTokenService<S>>) -> AppState {
    AppState::with_defaults(service.clone(), service, Arc::new(directory()))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Session store whose backend is always down
#[derive(Default)]
pub struct UnavailableStore {
    pub fail_saves: bool,
    inner: InMemorySessionStore,
}

impl UnavailableStore {
    /// Accepts writes, fails reads
    pub fn failing_loads() -> Self {
        Self::default()
    }

    /// Fails writes too
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    fn down() -> StoreError {
        StoreError::Unavailable {
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl SessionStore for UnavailableStore {
    async fn save(&self, session_id: &SessionId, user_id: UserId) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(Self::down());
        }
        self.inner.save(session_id, user_id).await
    }

    async fn load(&self, _session_id: &SessionId) -> Result<UserId, StoreError> {
        Err(Self::down())
    }

    async fn remove(&self, _session_id: &SessionId) -> Result<(), StoreError> {
        Err(Self::down())
    }
}
