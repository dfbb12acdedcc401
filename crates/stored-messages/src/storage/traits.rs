//! List-store trait definition

use anyhow::Result;

/// Trait for an ordered-list key-value store
///
/// Each method maps to one primitive of the underlying store and must be
/// atomic on its own. Nothing is guaranteed across calls.
pub trait ListStore: Send + Sync {
    /// Append an entry at the tail of the list
    fn push(&self, key: &str, entry: &str) -> Result<()>;

    /// Read the whole list, head first. A missing key reads as empty.
    fn range(&self, key: &str) -> Result<Vec<String>>;

    /// Remove every entry equal to `entry`, returning how many were removed
    fn remove_all(&self, key: &str, entry: &str) -> Result<usize>;

    /// Drop the list. A missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}
