pub mod session;

pub use session::{InMemorySessionStore, SessionStore};

#[cfg(test)]
pub use session::MockSessionStore;
