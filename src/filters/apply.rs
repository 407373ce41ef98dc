use crate::models::{Conversation, ConversationIndex};

/// Conversations matching a search query, in index order
///
/// Match logic:
/// - Empty or whitespace-only query: every conversation
/// - Otherwise a conversation matches when its peer name or any message's
///   content contains the query (case-insensitive substring match)
///
/// Whole conversations are returned; ranking is applied separately.
pub fn filter_conversations<'a>(index: &'a ConversationIndex, query: &str) -> Vec<&'a Conversation> {
    if query.trim().is_empty() {
        return index.iter().collect();
    }

    let needle = fold_case(query);
    index.iter().filter(|conversation| matches_conversation(conversation, &needle)).collect()
}

/// `needle` must already be folded with [`fold_case`]
fn matches_conversation(conversation: &Conversation, needle: &str) -> bool {
    contains_folded(conversation.peer.as_str(), needle)
        || conversation.messages.iter().any(|m| contains_folded(&m.content, needle))
}

/// Case-insensitive substring match against an already folded needle
fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}

/// Lowercase one character at a time, without the final-sigma context rule
/// of `str::to_lowercase`, so extending a query never widens its matches
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
