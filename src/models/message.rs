use serde::Serialize;

use super::timestamp::Timestamp;

/// How a message's content should be rendered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "url")]
pub enum MessageCategory {
    PlainText,
    /// `[https://...]` media reference (GIFs, stickers); `url` is the bracketed link
    BracketedMedia(String),
    /// Link to a recognized video platform
    PlatformVideoLink(String),
    GenericLink(String),
}

impl MessageCategory {
    pub fn url(&self) -> Option<&str> {
        match self {
            MessageCategory::PlainText => None,
            MessageCategory::BracketedMedia(url)
            | MessageCategory::PlatformVideoLink(url)
            | MessageCategory::GenericLink(url) => Some(url),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::PlainText => "text",
            MessageCategory::BracketedMedia(_) => "media",
            MessageCategory::PlatformVideoLink(_) => "video",
            MessageCategory::GenericLink(_) => "link",
        }
    }
}

/// A message ready for rendering. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedMessage {
    pub category: MessageCategory,
    pub original_content: String,
    pub timestamp: Timestamp,
    pub is_outgoing: bool,
}
