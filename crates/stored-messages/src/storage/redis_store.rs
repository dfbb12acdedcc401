//! Redis-backed list store
//!
//! Uses the synchronous Redis client to stay executor-agnostic.

use anyhow::{Context, Result};
use redis::{Client, Commands, Connection};
use std::sync::Mutex;

use super::ListStore;
use crate::config::redact_url;

/// List store backed by Redis lists
///
/// Primitives map onto single commands (`RPUSH`, `LRANGE`, `LREM`, `DEL`),
/// so each is atomic on the server. Commands from this handle are
/// serialized through one connection.
pub struct RedisListStore {
    conn: Mutex<Connection>,
}

impl RedisListStore {
    /// Connect to the server at `url` (e.g. `redis://localhost:6379/0`)
    pub fn open(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .with_context(|| format!("Invalid Redis URL: {}", redact_url(url)))?;
        let conn = client
            .get_connection()
            .with_context(|| format!("Failed to connect to Redis at {}", redact_url(url)))?;
        log::info!("[STORE] Connected to Redis at {}", redact_url(url));
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already-established connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn with_conn<T>(&self, f: impl FnOnce(&mut Connection) -> redis::RedisResult<T>) -> Result<T> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("Redis connection lock poisoned"))?;
        Ok(f(&mut conn)?)
    }
}

impl ListStore for RedisListStore {
    fn push(&self, key: &str, entry: &str) -> Result<()> {
        self.with_conn(|conn| conn.rpush::<_, _, ()>(key, entry))
    }

    fn range(&self, key: &str) -> Result<Vec<String>> {
        self.with_conn(|conn| conn.lrange(key, 0, -1))
    }

    fn remove_all(&self, key: &str, entry: &str) -> Result<usize> {
        // A count of 0 removes every match
        self.with_conn(|conn| conn.lrem(key, 0, entry))
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| conn.del::<_, ()>(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Connect to the server named by `STORED_MESSAGES_REDIS_URL`, if any
    fn live_store() -> Option<RedisListStore> {
        let url = config::env_var("STORED_MESSAGES_REDIS_URL")?;
        Some(RedisListStore::open(&url).unwrap())
    }

    /// A key unique to this test run, cleared before use
    fn fresh_key(store: &RedisListStore, name: &str) -> String {
        let key = format!("stored-messages-test:{}:{}", std::process::id(), name);
        store.delete(&key).unwrap();
        key
    }

    #[test]
    fn test_open_rejects_unparseable_url() {
        assert!(RedisListStore::open("not a url").is_err());
        assert!(RedisListStore::open("http://localhost:6379").is_err());
    }

    #[test]
    fn test_open_error_hides_password() {
        let err = match RedisListStore::open("redis://:s3cret@127.0.0.1:1/0") {
            Ok(_) => panic!("nothing should listen on port 1"),
            Err(err) => err,
        };
        let text = format!("{:#}", err);
        assert!(text.contains("127.0.0.1:1"));
        assert!(!text.contains("s3cret"));
    }

    #[test]
    fn test_push_preserves_order() {
        let Some(store) = live_store() else { return };
        let key = fresh_key(&store, "order");

        store.push(&key, "a").unwrap();
        store.push(&key, "b").unwrap();
        store.push(&key, "a").unwrap();

        assert_eq!(store.range(&key).unwrap(), vec!["a", "b", "a"]);
        store.delete(&key).unwrap();
    }

    #[test]
    fn test_range_missing_key_is_empty() {
        let Some(store) = live_store() else { return };
        let key = fresh_key(&store, "missing");
        assert!(store.range(&key).unwrap().is_empty());
    }

    #[test]
    fn test_remove_all_removes_every_match() {
        let Some(store) = live_store() else { return };
        let key = fresh_key(&store, "remove");
        for entry in ["a", "b", "a", "c", "a"] {
            store.push(&key, entry).unwrap();
        }

        assert_eq!(store.remove_all(&key, "a").unwrap(), 3);
        assert_eq!(store.range(&key).unwrap(), vec!["b", "c"]);
        assert_eq!(store.remove_all(&key, "a").unwrap(), 0);
        store.delete(&key).unwrap();
        assert_eq!(store.remove_all(&key, "a").unwrap(), 0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let Some(store) = live_store() else { return };
        let key = fresh_key(&store, "delete");
        store.push(&key, "a").unwrap();

        store.delete(&key).unwrap();
        store.delete(&key).unwrap();
        assert!(store.range(&key).unwrap().is_empty());
    }
}
