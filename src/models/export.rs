use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// Chat history exactly as it appears in the export, keyed by the raw
/// `"Chat History with NAME:"` strings in document order.
pub type RawChatHistory = IndexMap<String, Vec<RawMessage>>;

/// A single direct message as read from the export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "From", default, deserialize_with = "crate::parsers::deserializers::nullable_string")]
    pub from: String,
    #[serde(
        rename = "Content",
        default,
        deserialize_with = "crate::parsers::deserializers::nullable_string"
    )]
    pub content: String,
    #[serde(rename = "Date", default, deserialize_with = "crate::parsers::deserializers::nullable_string")]
    pub date: String,
}

impl RawMessage {
    pub fn new(from: impl Into<String>, content: impl Into<String>, date: impl Into<String>) -> Self {
        Self { from: from.into(), content: content.into(), date: date.into() }
    }

    /// Parsed form of the `Date` field, falling back to the unparsable sentinel
    pub fn timestamp(&self) -> Timestamp {
        Timestamp::parse(&self.date)
    }
}

/// Normalized name of the other participant in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PeerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PeerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PeerId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// One-to-one conversation with a peer; messages keep source document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    pub peer: PeerId,
    pub messages: Vec<RawMessage>,
}

impl Conversation {
    pub fn new(peer: PeerId, messages: Vec<RawMessage>) -> Self {
        Self { peer, messages }
    }

    pub fn last_message(&self) -> Option<&RawMessage> {
        self.messages.last()
    }

    /// Timestamp of the last message; empty conversations report the unparsable sentinel
    pub fn last_activity(&self) -> Timestamp {
        self.last_message().map(RawMessage::timestamp).unwrap_or(Timestamp::Unparsable)
    }

    /// Outgoing messages are the ones not authored by the peer.
    ///
    /// This mirrors how the export labels authors and does not hold for
    /// self-chats or group threads.
    pub fn is_outgoing(&self, message: &RawMessage) -> bool {
        message.from != self.peer.as_str()
    }
}

/// Canonical conversation map, keyed by peer, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationIndex {
    conversations: IndexMap<PeerId, Conversation>,
}

impl ConversationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a conversation, returning the one it replaced when the peer was already present.
    ///
    /// A replaced entry keeps its original position in iteration order.
    pub fn insert(&mut self, conversation: Conversation) -> Option<Conversation> {
        self.conversations.insert(conversation.peer.clone(), conversation)
    }

    pub fn get(&self, peer: &str) -> Option<&Conversation> {
        self.conversations.get(peer)
    }

    pub fn contains(&self, peer: &str) -> bool {
        self.conversations.contains_key(peer)
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.values()
    }

    pub fn peers(&self) -> impl Iterator<Item = &PeerId> {
        self.conversations.keys()
    }

    pub fn message_count(&self) -> usize {
        self.iter().map(|c| c.messages.len()).sum()
    }
}

impl FromIterator<Conversation> for ConversationIndex {
    fn from_iter<I: IntoIterator<Item = Conversation>>(iter: I) -> Self {
        let mut index = Self::new();
        for conversation in iter {
            index.insert(conversation);
        }
        index
    }
}
