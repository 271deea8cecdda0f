//! Integration tests for the Redis session store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p tg_infra --test redis_integration -- --ignored

use std::sync::Arc;

use tg_core::{
    FixedClock, Rs256KeyManager, SessionId, SessionStore, StoreError, TokenError, TokenService,
    TokenServiceConfig, User, UserId,
};
use tg_infra::cache::{CacheConfig, RedisClient, RedisSessionStore};

async fn store(ttl_seconds: u64) -> RedisSessionStore {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
    .with_prefix(format!("taskgate-test-{}", SessionId::generate()));

    let client = RedisClient::new(config).await.expect("Failed to connect to Redis");
    RedisSessionStore::new(client, ttl_seconds)
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_save_load_remove() {
    let store = store(60).await;
    let sid = SessionId::generate();

    store.save(&sid, UserId(20)).await.unwrap();
    assert_eq!(store.load(&sid).await.unwrap(), UserId(20));

    let ttl = store.remaining_ttl(&sid).await.unwrap().unwrap();
    assert!(ttl > 0 && ttl <= 60);

    store.remove(&sid).await.unwrap();
    assert_eq!(store.load(&sid).await, Err(StoreError::NotFound));
    assert_eq!(store.remove(&sid).await, Err(StoreError::NotFound));
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_records_expire() {
    let store = store(1).await;
    let sid = SessionId::generate();

    store.save(&sid, UserId(5)).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    assert_eq!(store.load(&sid).await, Err(StoreError::NotFound));
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_token_revocation_through_redis() {
    let config = TokenServiceConfig::default();
    let store = Arc::new(store(config.session_ttl_seconds()).await);
    let service = TokenService::new(
        store.clone(),
        FixedClock::at(chrono::Utc::now()),
        Rs256KeyManager::embedded().unwrap(),
        config,
    );

    let token = service.issue_token(&User::new(20, "test_user", "test")).await.unwrap();
    let session = service.verify_token(&token).await.unwrap();
    assert_eq!(session.user_id, UserId(20));

    let sid = session.session_id.clone();
    service.revoke_session(&sid).await.unwrap();

    assert_eq!(
        service.verify_token(&token).await.unwrap_err(),
        TokenError::SessionNotFound
    );
}
