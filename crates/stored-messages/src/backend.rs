//! Inbox/archive backend over a list store
//!
//! Messages are kept in two lists per user. Every entry is the message's
//! canonical encoding, so deleting by value is an exact string match.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::StoredMessagesSettings;
use crate::error::MessageTypeNotSupported;
use crate::models::{Level, Message, MessagePayload, UserId};
use crate::storage::{ListStore, RedisListStore};

/// The two per-user lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Inbox,
    Archive,
}

impl ListKind {
    /// Store key of this list for a user
    pub fn key(&self, user: UserId) -> String {
        match self {
            ListKind::Inbox => format!("user:{}:notifications", user),
            ListKind::Archive => format!("user:{}:archive", user),
        }
    }
}

/// Operations a notification framework needs from a storage backend
pub trait MessagesBackend: Send + Sync {
    /// Create a message stamped with the current UTC time
    fn create_message(&self, text: &str, level: Level, tags: &str) -> Message;

    /// Whether this backend can store the payload
    fn can_handle(&self, payload: &MessagePayload) -> bool;

    /// Append a message to each user's inbox
    fn inbox_store(&self, users: &[UserId], payload: MessagePayload) -> Result<()>;

    /// All inbox messages for a user, oldest first
    fn inbox_list(&self, user: UserId) -> Result<Vec<Message>>;

    /// Remove every inbox entry equal to the message, returning the count
    fn inbox_delete(&self, user: UserId, payload: MessagePayload) -> Result<usize>;

    /// Drop a user's whole inbox
    fn inbox_purge(&self, user: UserId) -> Result<()>;

    /// Append a message to each user's archive
    fn archive_store(&self, users: &[UserId], payload: MessagePayload) -> Result<()>;

    /// All archived messages for a user, oldest first
    fn archive_list(&self, user: UserId) -> Result<Vec<Message>>;
}

/// Stateless adapter storing messages in per-user lists
///
/// The list store is the only source of truth. Cloning a `MessageStore`
/// shares the same client.
#[derive(Clone)]
pub struct MessageStore {
    client: Arc<dyn ListStore>,
}

impl MessageStore {
    /// Create a backend over the given list store
    pub fn new(client: Arc<dyn ListStore>) -> Self {
        Self { client }
    }

    /// Connect to the store named in the settings
    pub fn from_settings(settings: &StoredMessagesSettings) -> Result<Self> {
        // Settings built by hand skip the checks done by the loaders
        settings.validate()?;
        let client = RedisListStore::open(&settings.redis_url)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Create a message stamped with the given instant
    pub fn create_message_at(
        &self,
        text: &str,
        level: Level,
        tags: &str,
        at: DateTime<Utc>,
    ) -> Message {
        Message::create_at(text, level, tags, at)
    }

    /// Extract the storable message, or fail before anything is written
    fn require_message(&self, payload: MessagePayload) -> Result<Message> {
        match payload {
            MessagePayload::Stored(msg) => Ok(msg),
            MessagePayload::Flash(_) => {
                log::warn!("[MESSAGES] Rejected payload that is not a stored message");
                Err(MessageTypeNotSupported.into())
            }
        }
    }

    fn store(&self, kind: ListKind, users: &[UserId], payload: MessagePayload) -> Result<()> {
        let msg = self.require_message(payload)?;
        let entry = msg.to_entry()?;

        for &user in users {
            let key = kind.key(user);
            self.client
                .push(&key, &entry)
                .with_context(|| format!("Failed to append to {}", key))?;
        }

        log::debug!("[MESSAGES] Stored message in {:?} of {} user(s)", kind, users.len());
        Ok(())
    }

    fn list(&self, kind: ListKind, user: UserId) -> Result<Vec<Message>> {
        let key = kind.key(user);
        let entries = self
            .client
            .range(&key)
            .with_context(|| format!("Failed to read {}", key))?;

        entries
            .iter()
            .map(|entry| Message::from_entry(entry).with_context(|| format!("Corrupt entry in {}", key)))
            .collect()
    }
}

impl MessagesBackend for MessageStore {
    fn create_message(&self, text: &str, level: Level, tags: &str) -> Message {
        Message::create(text, level, tags)
    }

    fn can_handle(&self, payload: &MessagePayload) -> bool {
        payload.as_stored().is_some()
    }

    fn inbox_store(&self, users: &[UserId], payload: MessagePayload) -> Result<()> {
        self.store(ListKind::Inbox, users, payload)
    }

    fn inbox_list(&self, user: UserId) -> Result<Vec<Message>> {
        self.list(ListKind::Inbox, user)
    }

    fn inbox_delete(&self, user: UserId, payload: MessagePayload) -> Result<usize> {
        let msg = self.require_message(payload)?;
        let entry = msg.to_entry()?;
        let key = ListKind::Inbox.key(user);

        let removed = self
            .client
            .remove_all(&key, &entry)
            .with_context(|| format!("Failed to remove from {}", key))?;
        log::debug!("[MESSAGES] Removed {} matching entries from {}", removed, key);
        Ok(removed)
    }

    fn inbox_purge(&self, user: UserId) -> Result<()> {
        let key = ListKind::Inbox.key(user);
        self.client
            .delete(&key)
            .with_context(|| format!("Failed to purge {}", key))?;
        log::debug!("[MESSAGES] Purged {}", key);
        Ok(())
    }

    fn archive_store(&self, users: &[UserId], payload: MessagePayload) -> Result<()> {
        self.store(ListKind::Archive, users, payload)
    }

    fn archive_list(&self, user: UserId) -> Result<Vec<Message>> {
        self.list(ListKind::Archive, user)
    }
}
