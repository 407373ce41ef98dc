//! Inbox ordering by most recent activity.
//!
//! Each conversation is keyed by the timestamp of its last message. Empty
//! conversations and unparsable dates share the unparsable sentinel, which
//! orders before every real date and therefore ranks last.
//!
//! The sort is stable: conversations with equal keys keep their input order,
//! so re-ranking an already ranked list is a no-op.

use crate::models::{Conversation, InboxEntry, Timestamp};

/// Preview text for a conversation without messages
pub const EMPTY_PREVIEW: &str = "No content";

/// Order conversations newest-first by last message timestamp
pub fn rank_conversations<'a, I>(conversations: I) -> Vec<&'a Conversation>
where
    I: IntoIterator<Item = &'a Conversation>,
{
    let mut keyed: Vec<(Timestamp, &'a Conversation)> =
        conversations.into_iter().map(|c| (c.last_activity(), c)).collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Ranked inbox rows
pub fn build_inbox<'a, I>(conversations: I) -> Vec<InboxEntry>
where
    I: IntoIterator<Item = &'a Conversation>,
{
    rank_conversations(conversations).into_iter().map(inbox_entry).collect()
}

fn inbox_entry(conversation: &Conversation) -> InboxEntry {
    InboxEntry {
        peer: conversation.peer.clone(),
        preview: conversation
            .last_message()
            .map(|m| m.content.clone())
            .unwrap_or_else(|| EMPTY_PREVIEW.to_string()),
        last_timestamp: conversation.last_activity(),
        message_count: conversation.messages.len(),
    }
}
