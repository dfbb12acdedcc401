//! List-store traits and implementations
//!
//! This module defines the abstraction over the external key-value client.
//! The trait-based design allows swapping between the in-memory store used
//! in tests and the Redis-backed store used in production.

mod memory;
mod redis_store;
mod traits;

pub use memory::InMemoryListStore;
pub use redis_store::RedisListStore;
pub use traits::ListStore;
