//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use serde_json::{Map, Value, json};
use tempfile::NamedTempFile;

/// Builder for export documents in the `DirectMessage → DirectMessages → ChatHistory` shape
pub struct ExportBuilder {
    chats: Map<String, Value>,
    spaced_keys: bool,
}

impl ExportBuilder {
    /// Create a new builder with an empty chat history
    pub fn new() -> Self {
        Self { chats: Map::new(), spaced_keys: false }
    }

    /// Use the `"Direct Message"` / `"Direct Messages"` key spelling of real exports
    pub fn spaced_keys(mut self) -> Self {
        self.spaced_keys = true;
        self
    }

    /// Add a conversation under `"Chat History with {peer}:"`
    pub fn with_chat(self, peer: &str, messages: &[MessageBuilder]) -> Self {
        self.with_raw_chat(&format!("Chat History with {}:", peer), messages)
    }

    /// Add a conversation under an arbitrary raw key
    pub fn with_raw_chat(mut self, raw_key: &str, messages: &[MessageBuilder]) -> Self {
        let messages = messages.iter().map(MessageBuilder::to_value).collect();
        self.chats.insert(raw_key.to_string(), Value::Array(messages));
        self
    }

    /// Build the export as a JSON value
    pub fn to_value(&self) -> Value {
        let (outer, inner) =
            if self.spaced_keys { ("Direct Message", "Direct Messages") } else { ("DirectMessage", "DirectMessages") };
        json!({
            "Profile": { "Profile Information": { "ProfileMap": { "userName": "me" } } },
            outer: { inner: { "ChatHistory": Value::Object(self.chats.clone()) } }
        })
    }

    /// Build the export as JSON text
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Write the export to a temp file (kept alive by the returned handle)
    pub fn write_temp(&self) -> NamedTempFile {
        write_temp(&self.to_json())
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single message
#[derive(Clone)]
pub struct MessageBuilder {
    from: String,
    content: String,
    date: String,
}

impl MessageBuilder {
    /// Message sent by the peer
    pub fn from_peer(peer: &str) -> Self {
        Self { from: peer.to_string(), content: "Test message".to_string(), date: "2023-01-01 00:00:00".to_string() }
    }

    /// Message sent by the account owner
    pub fn from_me() -> Self {
        Self::from_peer("me")
    }

    /// Set the content
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Set the raw date string
    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn to_value(&self) -> Value {
        json!({ "From": self.from, "Content": self.content, "Date": self.date })
    }
}

/// Write arbitrary text to a temp file
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Helper to create a realistic export with a few conversations of mixed content
pub fn realistic_export() -> ExportBuilder {
    ExportBuilder::new()
        .spaced_keys()
        .with_chat(
            "alice",
            &[
                MessageBuilder::from_peer("alice").content("hey!").date("2023-01-01 09:00:00"),
                MessageBuilder::from_me().content("[https://media.example.com/wave.gif]").date("2023-01-01 09:01:00"),
                MessageBuilder::from_peer("alice").content("lol").date("2023-01-02 10:00:00"),
            ],
        )
        .with_chat(
            "bob",
            &[
                MessageBuilder::from_me().content("https://www.tiktok.com/@u/video/1").date("2023-01-04 20:00:00"),
                MessageBuilder::from_peer("bob").content("www.example.com/recipe").date("2023-01-05 09:00:00"),
            ],
        )
        .with_chat("carol", &[MessageBuilder::from_peer("carol").content("who is this?").date("not-a-date")])
        .with_chat("dave", &[])
}
