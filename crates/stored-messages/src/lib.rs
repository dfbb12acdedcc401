//! Stored messages - persistent per-user notification lists
//!
//! This crate provides the storage backend for a notification framework:
//! - Message value types and their canonical wire encoding
//! - A list-store abstraction over the key-value client (in-memory, Redis)
//! - The `MessageStore` adapter exposing inbox/archive operations
//! - Settings loading for the store connection
//!
//! The crate holds no state of its own. Everything lives in the injected
//! list store.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use backend::{ListKind, MessageStore, MessagesBackend};
pub use config::StoredMessagesSettings;
pub use error::MessageTypeNotSupported;
pub use models::{FlashMessage, Level, Message, MessagePayload, UserId, format_timestamp};
pub use storage::{InMemoryListStore, ListStore, RedisListStore};
