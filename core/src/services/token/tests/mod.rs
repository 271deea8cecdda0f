
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use crate::clock::FixedClock;
use crate::domain::entities::user::User;
use crate::repositories::MockSessionStore;

use super::{Rs256KeyManager, TokenService, TokenServiceConfig};

pub(super) type TestService = TokenService<Arc<MockSessionStore>, FixedClock>;

/// Token service on the embedded keys, pinned at 2023-01-01T00:00:00Z + `offset`
pub(super) fn service_at(store: Arc<MockSessionStore>, offset: Duration) -> TestService {
    TokenService::new(
        store,
        FixedClock::default().advanced_by(offset),
        Rs256KeyManager::embedded().unwrap(),
        TokenServiceConfig::default(),
    )
}

pub(super) fn test_service() -> (TestService, Arc<MockSessionStore>) {
    let store = Arc::new(MockSessionStore::new());
    (service_at(store.clone(), Duration::zero()), store)
}

pub(super) fn test_user() -> User {
    User::new(20, "test_user", "test")
}

pub(super) fn epoch() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

/// Replaces one character in the middle of the given dot-separated segment
pub(super) fn tamper_segment(token: &str, segment: usize) -> String {
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let target = &mut parts[segment];
    let mid = target.len() / 2;
    let original = target.as_bytes()[mid] as char;
    let replacement = if original == 'A' { "B" } else { "A" };
    target.replace_range(mid..mid + 1, replacement);
    parts.join(".")
}
