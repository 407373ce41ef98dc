use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;
use crate::models::{ConversationIndex, RawChatHistory};
use crate::parsers::normalizer::normalize_chat_history;
use crate::utils::validate_file_size;

/// Path to the chat history node. Each segment lists its accepted key names;
/// real exports use the spaced forms.
const CHAT_HISTORY_PATH: &[&[&str]] =
    &[&["DirectMessage", "Direct Message"], &["DirectMessages", "Direct Messages"], &["ChatHistory"]];

/// Parse export text and return the raw chat history mapping, unmodified
///
/// # Errors
///
/// - [`LoadError::MalformedJson`] if the text is not JSON
/// - [`LoadError::SchemaMismatch`] if a path segment is missing or not an object,
///   or if a conversation is not a list of message objects
pub fn load_chat_history(text: &str) -> Result<RawChatHistory, LoadError> {
    let mut node: Value = serde_json::from_str(text).map_err(LoadError::MalformedJson)?;

    for names in CHAT_HISTORY_PATH {
        let object = node
            .as_object_mut()
            .ok_or_else(|| LoadError::schema(format!("expected an object containing \"{}\"", names[0])))?;
        let key = names
            .iter()
            .copied()
            .find(|name| object.contains_key(*name))
            .ok_or_else(|| LoadError::schema(format!("missing \"{}\"", names[0])))?;
        node = object.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    }

    if !node.is_object() {
        return Err(LoadError::schema("\"ChatHistory\" is not an object"));
    }

    serde_json::from_value(node).map_err(|e| LoadError::schema(e.to_string()))
}

/// Load export text all the way to the canonical conversation index
pub fn load_export(text: &str) -> Result<ConversationIndex, LoadError> {
    let raw = load_chat_history(text)?;
    let raw_count = raw.len();
    let index = normalize_chat_history(raw);
    debug!(conversations = index.len(), raw_entries = raw_count, "loaded export");
    Ok(index)
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode export bytes as text: a leading UTF-8 BOM is dropped and invalid
/// sequences become U+FFFD
fn decode_export_bytes(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
}

/// Read a whole export file, after checking its size, and load it
pub fn load_export_file(path: &Path, max_size_bytes: u64) -> Result<ConversationIndex, LoadError> {
    let io_err = |source| LoadError::Io { path: path.to_path_buf(), source };

    // Size is checked on the opened handle so the file we read is the file we measured
    let mut file = File::open(path).map_err(io_err)?;
    validate_file_size(&file, path, max_size_bytes)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(io_err)?;
    load_export(&decode_export_bytes(&bytes))
}
