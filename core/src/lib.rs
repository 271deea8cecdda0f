//! # TaskGate Core
//!
//! Token lifecycle logic for the TaskGate backend: RS256 access token
//! issuance, request-time verification, and the session store contract
//! that makes server-side revocation of otherwise self-contained tokens
//! possible.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
