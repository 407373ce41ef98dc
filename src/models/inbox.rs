use serde::Serialize;

use super::export::PeerId;
use super::timestamp::Timestamp;

/// One row of the conversation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxEntry {
    pub peer: PeerId,
    pub preview: String,
    pub last_timestamp: Timestamp,
    pub message_count: usize,
}
