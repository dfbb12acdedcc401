//! Error types callers are expected to match on
//!
//! Everything else propagates as `anyhow::Error`.

/// Returned when a store or delete operation receives a payload that is not
/// a [`Message`](crate::models::Message)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Message type not supported by this backend")]
pub struct MessageTypeNotSupported;
