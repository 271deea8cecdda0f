//! Unit tests for the in-memory session store

use chrono::Duration;
use std::sync::Arc;

use crate::clock::{Clock, FixedClock};
use crate::domain::entities::session::SessionId;
use crate::domain::entities::user::UserId;
use crate::errors::StoreError;
use crate::repositories::session::{InMemorySessionStore, SessionStore};

/// Clock whose instant can be moved by the test
struct SteppingClock(std::sync::Mutex<FixedClock>);

impl SteppingClock {
    fn new() -> Self {
        Self(std::sync::Mutex::new(FixedClock::default()))
    }

    fn advance(&self, delta: Duration) {
        let mut clock = self.0.lock().unwrap();
        *clock = clock.advanced_by(delta);
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.0.lock().unwrap().now()
    }
}

#[tokio::test]
async fn test_save_and_load() {
    let store = InMemorySessionStore::new();
    let sid = SessionId::generate();

    store.save(&sid, UserId(20)).await.unwrap();

    assert_eq!(store.load(&sid).await.unwrap(), UserId(20));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_load_unknown_session() {
    let store = InMemorySessionStore::new();
    let result = store.load(&SessionId::generate()).await;
    assert_eq!(result, Err(StoreError::NotFound));
}

#[tokio::test]
async fn test_remove_session() {
    let store = InMemorySessionStore::new();
    let sid = SessionId::generate();
    store.save(&sid, UserId(1)).await.unwrap();

    store.remove(&sid).await.unwrap();

    assert_eq!(store.load(&sid).await, Err(StoreError::NotFound));
    assert_eq!(store.remove(&sid).await, Err(StoreError::NotFound));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_entries_expire_with_ttl() {
    let clock = Arc::new(SteppingClock::new());
    let store = InMemorySessionStore::with_ttl(clock.clone(), Duration::minutes(30));
    let sid = SessionId::generate();
    store.save(&sid, UserId(5)).await.unwrap();

    clock.advance(Duration::minutes(29) + Duration::seconds(59));
    assert_eq!(store.load(&sid).await.unwrap(), UserId(5));

    clock.advance(Duration::seconds(1));
    assert_eq!(store.load(&sid).await, Err(StoreError::NotFound));
    // Expired record was dropped on read
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_clones_share_records() {
    let store = InMemorySessionStore::new();
    let other = store.clone();
    let sid = SessionId::generate();

    store.save(&sid, UserId(3)).await.unwrap();
    assert_eq!(other.load(&sid).await.unwrap(), UserId(3));
}

#[tokio::test]
async fn test_store_through_arc() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let sid = SessionId::generate();

    store.save(&sid, UserId(9)).await.unwrap();
    assert_eq!(store.load(&sid).await.unwrap(), UserId(9));
}
