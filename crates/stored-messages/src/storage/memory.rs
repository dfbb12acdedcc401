//! In-memory list store
//!
//! Used in tests and for single-process deployments that do not need the
//! lists to outlive the process.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use super::ListStore;

/// In-memory implementation of ListStore
///
/// Each primitive holds the lock for its whole duration, which makes it
/// atomic with respect to the others.
pub struct InMemoryListStore {
    lists: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryListStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries under a key
    pub fn len(&self, key: &str) -> usize {
        let lists = self.lists.read().unwrap();
        lists.get(key).map_or(0, Vec::len)
    }

    /// Keys that currently hold a non-empty list, sorted
    pub fn keys(&self) -> Vec<String> {
        let lists = self.lists.read().unwrap();
        let mut keys: Vec<String> = lists.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore for InMemoryListStore {
    fn push(&self, key: &str, entry: &str) -> Result<()> {
        let mut lists = self.lists.write().unwrap();
        lists.entry(key.to_string()).or_default().push(entry.to_string());
        Ok(())
    }

    fn range(&self, key: &str) -> Result<Vec<String>> {
        let lists = self.lists.read().unwrap();
        Ok(lists.get(key).cloned().unwrap_or_default())
    }

    fn remove_all(&self, key: &str, entry: &str) -> Result<usize> {
        let mut lists = self.lists.write().unwrap();
        let Some(list) = lists.get_mut(key) else {
            return Ok(0);
        };

        let before = list.len();
        list.retain(|e| e != entry);
        let removed = before - list.len();

        // Like Redis, an emptied list no longer exists
        if list.is_empty() {
            lists.remove(key);
        }

        Ok(removed)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut lists = self.lists.write().unwrap();
        lists.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let store = InMemoryListStore::new();
        store.push("k", "a").unwrap();
        store.push("k", "b").unwrap();
        store.push("k", "a").unwrap();

        assert_eq!(store.range("k").unwrap(), vec!["a", "b", "a"]);
        assert_eq!(store.len("k"), 3);
    }

    #[test]
    fn test_range_missing_key_is_empty() {
        let store = InMemoryListStore::new();
        assert!(store.range("missing").unwrap().is_empty());
        assert_eq!(store.len("missing"), 0);
    }

    #[test]
    fn test_remove_all_removes_every_match() {
        let store = InMemoryListStore::new();
        for entry in ["a", "b", "a", "c", "a"] {
            store.push("k", entry).unwrap();
        }

        assert_eq!(store.remove_all("k", "a").unwrap(), 3);
        assert_eq!(store.range("k").unwrap(), vec!["b", "c"]);
        assert_eq!(store.remove_all("k", "a").unwrap(), 0);
        assert_eq!(store.remove_all("missing", "a").unwrap(), 0);
    }

    #[test]
    fn test_emptied_list_drops_key() {
        let store = InMemoryListStore::new();
        store.push("k", "a").unwrap();
        store.push("other", "x").unwrap();

        store.remove_all("k", "a").unwrap();
        assert_eq!(store.keys(), vec!["other"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = InMemoryListStore::new();
        store.push("k", "a").unwrap();

        store.delete("k").unwrap();
        store.delete("k").unwrap();
        assert!(store.range("k").unwrap().is_empty());
        assert!(store.keys().is_empty());
    }
}
