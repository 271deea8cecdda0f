//! Authentication route handlers
//!
//! - Login: exchanges credentials for an access token
//! - Logout: revokes the session record behind the caller's token

pub mod login;
pub mod logout;

pub use login::login;
pub use logout::logout;
