//! Domain entities representing core business objects.

pub mod session;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use session::{AuthenticatedSession, SessionId};
pub use token::{
    Claims, ACCESS_TOKEN_EXPIRY_MINUTES, ACCESS_TOKEN_SUBJECT, JWT_ISSUER, ROLE_CLAIM,
    SESSION_ID_CLAIM, USER_NAME_CLAIM,
};
pub use user::{User, UserId, ADMIN_ROLE};
