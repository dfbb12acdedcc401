//! Message model and its canonical wire encoding

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Level, format_timestamp};

/// A stored notification
///
/// A message is fully determined by its four fields. Two messages with equal
/// fields serialize to the same bytes, which is what delete-by-value relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    /// Text body
    pub message: String,
    /// Severity code
    pub level: Level,
    /// Space-separated labels, possibly empty
    pub tags: String,
    /// Creation time, see [`format_timestamp`]
    pub date: String,
}

impl Message {
    /// Version of the entry encoding produced by [`Message::to_entry`].
    ///
    /// Entries are compact JSON arrays `[message, level, tags, date]`. Any
    /// change to field order or formatting must bump this, since entries
    /// written under the old encoding can no longer be deleted by value.
    ///
    /// This is not the layout of Python's default `json.dumps`, which writes
    /// `", "` separators and `\uXXXX` escapes. Entries written that way still
    /// decode, but cannot be deleted by value.
    pub const WIRE_VERSION: u32 = 1;

    /// Build a message from its four fields as-is
    pub fn new(
        message: impl Into<String>,
        level: impl Into<Level>,
        tags: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            level: level.into(),
            tags: tags.into(),
            date: date.into(),
        }
    }

    /// Create a message stamped with the current UTC time
    pub fn create(message: impl Into<String>, level: impl Into<Level>, tags: impl Into<String>) -> Self {
        Self::create_at(message, level, tags, Utc::now())
    }

    /// Create a message stamped with the given instant
    pub fn create_at(
        message: impl Into<String>,
        level: impl Into<Level>,
        tags: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self::new(message, level, tags, format_timestamp(at))
    }

    /// Parse the `date` field back into an instant
    pub fn parsed_date(&self) -> Result<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(&self.date)
            .with_context(|| format!("Invalid message date: {}", self.date))?;
        Ok(parsed.with_timezone(&Utc))
    }

    /// Encode as a list entry
    pub fn to_entry(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to encode message")
    }

    /// Decode a list entry
    pub fn from_entry(entry: &str) -> Result<Self> {
        serde_json::from_str(entry)
            .with_context(|| format!("Failed to decode stored message: {}", entry))
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.message, self.level, &self.tags, &self.date).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (message, level, tags, date) = <(String, Level, String, String)>::deserialize(deserializer)?;
        Ok(Self {
            message,
            level,
            tags,
            date,
        })
    }
}
