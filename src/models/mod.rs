//! Data models for direct-message exports.
//!
//! - [`RawMessage`] - A message exactly as stored in the export document
//! - [`Conversation`] / [`ConversationIndex`] - The canonical per-peer model built on load
//! - [`Timestamp`] - Parsed message date with an explicit unparsable sentinel
//! - [`MessageCategory`] / [`ClassifiedMessage`] - Render classification of a message
//! - [`InboxEntry`] - A ranked row of the conversation list
//!
//! Export field names (`From`, `Content`, `Date`) are mapped with serde; null
//! handling lives in the parsers' `deserializers` module.

pub mod export;
pub mod inbox;
pub mod message;
pub mod timestamp;

pub use export::{Conversation, ConversationIndex, PeerId, RawChatHistory, RawMessage};
pub use inbox::InboxEntry;
pub use message::{ClassifiedMessage, MessageCategory};
pub use timestamp::Timestamp;
