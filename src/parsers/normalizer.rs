use tracing::warn;

use crate::models::{Conversation, ConversationIndex, PeerId, RawChatHistory};

const PEER_KEY_PREFIX: &str = "Chat History with ";
const PEER_KEY_SUFFIX: char = ':';

/// Derive a peer name from a raw chat history key.
///
/// Strips the `"Chat History with "` prefix and a single trailing `:` when
/// present, then trims. Keys that match neither come back trimmed but
/// otherwise unchanged.
pub fn normalize_peer_key(raw_key: &str) -> PeerId {
    let without_prefix = raw_key.strip_prefix(PEER_KEY_PREFIX).unwrap_or(raw_key);
    let without_suffix = without_prefix.strip_suffix(PEER_KEY_SUFFIX).unwrap_or(without_prefix);
    PeerId::new(without_suffix.trim())
}

/// Build the canonical conversation index from the raw chat history.
///
/// When two raw keys normalize to the same peer the later entry replaces the
/// earlier one (last write wins); the index then holds fewer conversations
/// than the raw mapping.
pub fn normalize_chat_history(raw: RawChatHistory) -> ConversationIndex {
    let mut index = ConversationIndex::new();

    for (raw_key, messages) in raw {
        let peer = normalize_peer_key(&raw_key);
        if let Some(replaced) = index.insert(Conversation::new(peer, messages)) {
            warn!(
                peer = %replaced.peer,
                raw_key = %raw_key,
                dropped_messages = replaced.messages.len(),
                "duplicate peer after key normalization, keeping the later conversation"
            );
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawMessage;

    fn raw(entries: Vec<(&str, Vec<&str>)>) -> RawChatHistory {
        entries
            .into_iter()
            .map(|(key, contents)| {
                let messages = contents.into_iter().map(|c| RawMessage::new("x", c, "")).collect();
                (key.to_string(), messages)
            })
            .collect()
    }

    #[test]
    fn test_normalize_peer_key_full_form() {
        assert_eq!(normalize_peer_key("Chat History with Alice:"), PeerId::new("Alice"));
    }

    #[test]
    fn test_normalize_peer_key_plain() {
        assert_eq!(normalize_peer_key("Bob"), PeerId::new("Bob"));
        assert_eq!(normalize_peer_key("  Bob  "), PeerId::new("Bob"));
    }

    #[test]
    fn test_normalize_peer_key_partial_forms() {
        assert_eq!(normalize_peer_key("Chat History with carol"), PeerId::new("carol"));
        assert_eq!(normalize_peer_key("dave:"), PeerId::new("dave"));
        // Only one trailing colon is removed
        assert_eq!(normalize_peer_key("Chat History with eve::"), PeerId::new("eve:"));
        // Prefix must be at the start
        assert_eq!(normalize_peer_key(" Chat History with frank:"), PeerId::new("Chat History with frank"));
    }

    #[test]
    fn test_normalize_peer_key_empty() {
        assert_eq!(normalize_peer_key(""), PeerId::new(""));
        assert_eq!(normalize_peer_key("Chat History with :"), PeerId::new(""));
    }

    #[test]
    fn test_normalize_preserves_count_and_order() {
        let index = normalize_chat_history(raw(vec![
            ("Chat History with b:", vec!["1"]),
            ("Chat History with a:", vec!["2"]),
            ("c", vec![]),
        ]));
        assert_eq!(index.len(), 3);
        let peers: Vec<&str> = index.peers().map(PeerId::as_str).collect();
        assert_eq!(peers, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_normalize_collision_last_write_wins() {
        let index = normalize_chat_history(raw(vec![
            ("Chat History with alice:", vec!["first"]),
            ("Chat History with bob:", vec!["bob"]),
            ("alice", vec!["second"]),
        ]));

        assert_eq!(index.len(), 2);
        let alice = index.get("alice").unwrap();
        assert_eq!(alice.messages.len(), 1);
        assert_eq!(alice.messages[0].content, "second");
    }
}
