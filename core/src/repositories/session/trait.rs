//! Session store trait defining the contract for session record persistence.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::session::SessionId;
use crate::domain::entities::user::UserId;
use crate::errors::StoreError;

/// Key-value store binding session identifiers to user identities
///
/// Every issued token references exactly one record in this store. Removing
/// the record revokes every token that points at it, regardless of the
/// token's own expiration.
///
/// # Concurrency
/// Implementations must be safe to share across requests. Per-key atomic
/// get/set is sufficient; no cross-key transactions are needed.
///
/// # Expiry
/// Records are expected to disappear on their own no later than the token
/// lifetime. Callers never sweep expired records.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new `session_id -> user_id` binding
    ///
    /// # Returns
    /// * `Ok(())` - Binding stored
    /// * `Err(StoreError::Unavailable)` - The backend could not be reached
    async fn save(&self, session_id: &SessionId, user_id: UserId) -> Result<(), StoreError>;

    /// Resolve the user bound to a session
    ///
    /// # Returns
    /// * `Ok(UserId)` - Live record found
    /// * `Err(StoreError::NotFound)` - Record absent, removed or expired
    /// * `Err(StoreError::Unavailable)` - The backend could not be reached
    ///
    /// # Example
    /// ```no_run
    /// # use tg_core::repositories::SessionStore;
    /// # use tg_core::domain::entities::session::SessionId;
    /// # use tg_core::errors::StoreError;
    /// # async fn example(store: &impl SessionStore, sid: &SessionId) {
    /// match store.load(sid).await {
    ///     Ok(user_id) => println!("session belongs to {}", user_id),
    ///     Err(StoreError::NotFound) => println!("session revoked"),
    ///     Err(e) => println!("store degraded: {}", e),
    /// }
    /// # }
    /// ```
    async fn load(&self, session_id: &SessionId) -> Result<UserId, StoreError>;

    /// Delete a binding
    ///
    /// # Returns
    /// * `Ok(())` - Record removed
    /// * `Err(StoreError::NotFound)` - Nothing was stored under this key
    /// * `Err(StoreError::Unavailable)` - The backend could not be reached
    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn save(&self, session_id: &SessionId, user_id: UserId) -> Result<(), StoreError> {
        (**self).save(session_id, user_id).await
    }

    async fn load(&self, session_id: &SessionId) -> Result<UserId, StoreError> {
        (**self).load(session_id).await
    }

    async fn remove(&self, session_id: &SessionId) -> Result<(), StoreError> {
        (**self).remove(session_id).await
    }
}
