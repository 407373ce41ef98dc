use super::rules::{VideoHostPrefixes, extract_bracketed_url, is_bracketed_media, is_link};
use crate::config::ViewerConfig;
use crate::models::{ClassifiedMessage, Conversation, MessageCategory, RawMessage};

/// Assigns render categories to message content
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    video_hosts: VideoHostPrefixes,
}

impl Classifier {
    pub fn new(video_hosts: VideoHostPrefixes) -> Self {
        Self { video_hosts }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(VideoHostPrefixes::new(&config.video_host_prefixes))
    }

    pub fn video_hosts(&self) -> &VideoHostPrefixes {
        &self.video_hosts
    }

    /// Classify one message's content. First matching rule wins:
    ///
    /// 1. Bracketed media: `[https://...]`, carrying the bracketed URL, or the whole
    ///    content when no URL can be extracted
    /// 2. Links (`https://`, `http://`, `www.`): a platform video link when a configured
    ///    host prefix matches, otherwise a generic link; both carry the trimmed content
    /// 3. Plain text
    pub fn classify(&self, content: &str) -> MessageCategory {
        if is_bracketed_media(content) {
            let url = extract_bracketed_url(content).unwrap_or(content);
            return MessageCategory::BracketedMedia(url.to_string());
        }

        if is_link(content) {
            let url = content.trim().to_string();
            return if self.video_hosts.matches(content) {
                MessageCategory::PlatformVideoLink(url)
            } else {
                MessageCategory::GenericLink(url)
            };
        }

        MessageCategory::PlainText
    }

    /// Classify a message in the context of its conversation, attaching its
    /// timestamp and direction
    pub fn classify_message(&self, conversation: &Conversation, message: &RawMessage) -> ClassifiedMessage {
        ClassifiedMessage {
            category: self.classify(&message.content),
            original_content: message.content.clone(),
            timestamp: message.timestamp(),
            is_outgoing: conversation.is_outgoing(message),
        }
    }

    /// Classify every message of a conversation in order
    pub fn classify_conversation(&self, conversation: &Conversation) -> Vec<ClassifiedMessage> {
        conversation.messages.iter().map(|m| self.classify_message(conversation, m)).collect()
    }
}

/// Classify content with the default video host prefixes
pub fn classify(content: &str) -> MessageCategory {
    Classifier::default().classify(content)
}
