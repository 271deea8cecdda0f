//! Login collaborator contract
//!
//! Password storage and hashing live outside this crate. The HTTP layer only
//! needs something that turns a username and password into a [`User`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Resolves login credentials to a registered user
#[async_trait]
pub trait UserAuthenticator: Send + Sync {
    /// # Returns
    /// * `Ok(User)` - Credentials accepted
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// * `Err(DomainError::Internal)` - The backing directory failed
    async fn authenticate(&self, user_name: &str, password: &str) -> Result<User, DomainError>;
}

#[async_trait]
impl<T: UserAuthenticator + ?Sized> UserAuthenticator for Arc<T> {
    async fn authenticate(&self, user_name: &str, password: &str) -> Result<User, DomainError> {
        (**self).authenticate(user_name, password).await
    }
}
