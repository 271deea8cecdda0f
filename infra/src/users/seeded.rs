//! Development user directory seeded from configuration
//!
//! Not a credential store: passwords are held in memory as given. It exists
//! so the login route can be exercised without a user database.

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;
use std::collections::HashMap;
use tracing::{debug, info};

use tg_core::{AuthError, DomainError, User, UserAuthenticator, UserId};

use crate::InfrastructureError;

/// Environment variable holding the seed entries
pub const SEED_USERS_ENV: &str = "AUTH_SEED_USERS";

#[derive(Debug, Clone)]
struct SeededUser {
    user: User,
    password: String,
}

/// In-memory [`UserAuthenticator`] keyed by user name
#[derive(Debug, Clone, Default)]
pub struct SeededUserDirectory {
    users: HashMap<String, SeededUser>,
}

impl SeededUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user
    pub fn with_user(
        mut self,
        id: impl Into<UserId>,
        name: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        let user = User::new(id, name, role);
        self.users.insert(
            user.name.clone(),
            SeededUser {
                user,
                password: password.into(),
            },
        );
        self
    }

    /// Parses `id:name:password:role` entries separated by commas
    ///
    /// # Example
    /// ```
    /// use tg_infra::SeededUserDirectory;
    ///
    /// let directory = SeededUserDirectory::parse("1:root:secret:admin, 2:alice:pw:member").unwrap();
    /// assert_eq!(directory.len(), 2);
    /// ```
    pub fn parse(entries: &str) -> Result<Self, InfrastructureError> {
        entries
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .try_fold(Self::new(), |directory, entry| {
                let fields: Vec<&str> = entry.split(':').collect();
                let [id, name, password, role] = fields.as_slice() else {
                    return Err(InfrastructureError::Config(format!(
                        "Seed user entry must be id:name:password:role, got {} fields",
                        fields.len()
                    )));
                };

                let id: UserId = id.parse().map_err(|_| {
                    InfrastructureError::Config(format!("Seed user id '{}' is not an integer", id))
                })?;

                if name.is_empty() || password.is_empty() || role.is_empty() {
                    return Err(InfrastructureError::Config(format!(
                        "Seed user {} has an empty field",
                        id
                    )));
                }

                Ok(directory.with_user(id, *name, *password, *role))
            })
    }

    /// Loads the directory from `AUTH_SEED_USERS`; empty when unset
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let directory = match std::env::var(SEED_USERS_ENV) {
            Ok(entries) => Self::parse(&entries)?,
            Err(_) => Self::new(),
        };
        info!("Seeded user directory loaded with {} users", directory.len());
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserAuthenticator for SeededUserDirectory {
    async fn authenticate(&self, user_name: &str, password: &str) -> Result<User, DomainError> {
        match self.users.get(user_name) {
            Some(seeded) if constant_time_eq(seeded.password.as_bytes(), password.as_bytes()) => {
                Ok(seeded.user.clone())
            }
            _ => {
                debug!("Rejected login attempt");
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }
}
