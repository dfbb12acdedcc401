//! Domain models for stored notifications

mod level;
mod message;
mod payload;
mod timestamp;
mod user;

pub use level::Level;
pub use message::Message;
pub use payload::{FlashMessage, MessagePayload};
pub use timestamp::format_timestamp;
pub use user::UserId;
