//! Payload variants a caller can hand to a backend

use super::{Level, Message};

/// A display-layer message from the host framework
///
/// It has not been through `create_message` and carries no date, so it
/// cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub message: String,
    pub level: Level,
    pub tags: String,
}

impl FlashMessage {
    pub fn new(message: impl Into<String>, level: impl Into<Level>, tags: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: level.into(),
            tags: tags.into(),
        }
    }
}

/// Closed set of payloads a backend may receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    /// A message created by the backend, storable as-is
    Stored(Message),
    /// A host message that was never turned into a stored one
    Flash(FlashMessage),
}

impl MessagePayload {
    /// The stored message, if this payload is one
    pub fn as_stored(&self) -> Option<&Message> {
        match self {
            MessagePayload::Stored(msg) => Some(msg),
            MessagePayload::Flash(_) => None,
        }
    }
}

impl From<Message> for MessagePayload {
    fn from(msg: Message) -> Self {
        MessagePayload::Stored(msg)
    }
}

impl From<FlashMessage> for MessagePayload {
    fn from(msg: FlashMessage) -> Self {
        MessagePayload::Flash(msg)
    }
}
