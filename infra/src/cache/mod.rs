//! Cache module for Redis-backed session storage
//!
//! This module provides the Redis client with connection retry logic and the
//! session store that keeps `session_id -> user_id` bindings with a TTL.

pub mod redis_client;
pub mod session_store;


pub use redis_client::RedisClient;
pub use session_store::{session_key, RedisSessionStore};

// Re-export commonly used types
pub use tg_shared::CacheConfig;
