//! Domain layer containing the identity, session and token entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
