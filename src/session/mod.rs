//! Session controller owning all browsing state.
//!
//! A [`Session`] holds the active conversation index, the search query and the
//! selected conversation. The presentation layer drives it through explicit
//! calls instead of sharing mutable globals:
//!
//! - **Loading**: a successful load swaps in the new index wholesale and clears
//!   the error; a failed load records the error and changes nothing else.
//! - **Searching**: the query is stored as typed; [`Session::inbox`] re-runs
//!   filter and ranking on every call.
//! - **Reading**: [`Session::thread`] classifies the selected conversation on demand.
//!
//! # Example
//!
//! ```
//! use dm_explorer::Session;
//!
//! let mut session = Session::default();
//! let export = r#"{"DirectMessage": {"DirectMessages": {"ChatHistory": {
//!     "Chat History with alice:": [{"From": "alice", "Content": "hi", "Date": "2023-01-02 10:00:00"}]
//! }}}}"#;
//! session.load_str("user_data.json", export)?;
//! assert_eq!(session.inbox()[0].peer.as_str(), "alice");
//! # Ok::<(), dm_explorer::LoadError>(())
//! ```

use std::path::Path;

use tracing::warn;

use crate::classifier::Classifier;
use crate::config::{DEFAULT_MAX_FILE_SIZE_BYTES, ViewerConfig};
use crate::error::LoadError;
use crate::filters::filter_conversations;
use crate::models::{ClassifiedMessage, Conversation, ConversationIndex, InboxEntry, PeerId};
use crate::parsers::{load_export, load_export_file};
use crate::ranking::{build_inbox, rank_conversations};

#[derive(Debug)]
pub struct Session {
    index: Option<ConversationIndex>,
    source_name: Option<String>,
    query: String,
    selected: Option<PeerId>,
    last_error: Option<String>,
    classifier: Classifier,
    max_file_size_bytes: u64,
}

impl Session {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            classifier: Classifier::from_config(config),
            max_file_size_bytes: config.max_file_size_bytes,
            ..Self::default()
        }
    }

    /// Load export text, replacing the active index on success.
    ///
    /// Returns the number of conversations loaded.
    pub fn load_str(&mut self, source_name: &str, text: &str) -> Result<usize, LoadError> {
        let result = load_export(text);
        self.finish_load(source_name, result)
    }

    /// Read and load an export file, replacing the active index on success
    pub fn load_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let result = load_export_file(path, self.max_file_size_bytes);
        let source_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        self.finish_load(&source_name, result)
    }

    fn finish_load(
        &mut self,
        source_name: &str,
        result: Result<ConversationIndex, LoadError>,
    ) -> Result<usize, LoadError> {
        match result {
            Ok(index) => {
                let count = index.len();
                let selection_gone =
                    self.selected.as_ref().is_some_and(|peer| !index.contains(peer.as_str()));
                if selection_gone {
                    self.selected = None;
                }
                self.index = Some(index);
                self.source_name = Some(source_name.to_string());
                self.last_error = None;
                Ok(count)
            }
            Err(e) => {
                warn!(source = source_name, error = %e, "export load failed, keeping previous session");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&ConversationIndex> {
        self.index.as_ref()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// Conversations matching the current query, ranked newest first
    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        let Some(index) = &self.index else {
            return Vec::new();
        };
        rank_conversations(filter_conversations(index, &self.query))
    }

    /// Inbox rows for the current query; empty when nothing is loaded
    pub fn inbox(&self) -> Vec<InboxEntry> {
        match &self.index {
            Some(index) => build_inbox(filter_conversations(index, &self.query)),
            None => Vec::new(),
        }
    }

    /// Select a conversation by peer name. Returns false if no such peer is loaded.
    pub fn select(&mut self, peer: &str) -> bool {
        match self.index.as_ref().and_then(|index| index.get(peer)) {
            Some(conversation) => {
                self.selected = Some(conversation.peer.clone());
                true
            }
            None => false,
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_peer(&self) -> Option<&PeerId> {
        self.selected.as_ref()
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let peer = self.selected.as_ref()?;
        self.index.as_ref()?.get(peer.as_str())
    }

    /// Classified messages of the selected conversation
    pub fn thread(&self) -> Option<Vec<ClassifiedMessage>> {
        self.selected_conversation().map(|c| self.classifier.classify_conversation(c))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            index: None,
            source_name: None,
            query: String::new(),
            selected: None,
            last_error: None,
            classifier: Classifier::default(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    const EXPORT_A: &str = r#"{"DirectMessage": {"DirectMessages": {"ChatHistory": {
        "Chat History with Alice:": [{"From": "Alice", "Content": "hi", "Date": "2023-01-02T10:00:00Z"}],
        "Chat History with Bob:": [{"From": "me", "Content": "https://www.tiktok.com/@u/video/1", "Date": "2023-01-05T09:00:00Z"}]
    }}}}"#;

    const EXPORT_B: &str = r#"{"DirectMessage": {"DirectMessages": {"ChatHistory": {
        "Chat History with Carol:": []
    }}}}"#;

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert!(!session.is_loaded());
        assert!(session.inbox().is_empty());
        assert!(session.thread().is_none());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_load_and_inbox_order() {
        let mut session = Session::default();
        assert_eq!(session.load_str("a.json", EXPORT_A).unwrap(), 2);
        assert_eq!(session.source_name(), Some("a.json"));

        let peers: Vec<String> = session.inbox().iter().map(|e| e.peer.to_string()).collect();
        assert_eq!(peers, vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut session = Session::default();
        session.load_str("a.json", EXPORT_A).unwrap();
        session.select("Alice");
        let before = session.index().cloned();

        let err = session.load_str("bad.json", r#"{"DirectMessage": {}}"#).unwrap_err();
        assert!(matches!(err, LoadError::SchemaMismatch { .. }));
        assert_eq!(session.index().cloned(), before);
        assert_eq!(session.source_name(), Some("a.json"));
        assert_eq!(session.selected_peer().map(PeerId::as_str), Some("Alice"));
        assert!(session.last_error().is_some());

        // A later successful load clears the error
        session.load_str("a.json", EXPORT_A).unwrap();
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_reload_replaces_index_and_drops_stale_selection() {
        let mut session = Session::default();
        session.load_str("a.json", EXPORT_A).unwrap();
        assert!(session.select("Alice"));

        session.load_str("b.json", EXPORT_B).unwrap();
        assert_eq!(session.index().unwrap().len(), 1);
        assert!(session.selected_peer().is_none());
        assert!(!session.select("Alice"));
    }

    #[test]
    fn test_search_then_clear() {
        let mut session = Session::default();
        session.load_str("a.json", EXPORT_A).unwrap();

        session.set_query("TIKTOK");
        let peers: Vec<String> = session.inbox().iter().map(|e| e.peer.to_string()).collect();
        assert_eq!(peers, vec!["Bob"]);

        session.clear_search();
        assert_eq!(session.query(), "");
        assert_eq!(session.visible_conversations().len(), 2);
    }

    #[test]
    fn test_thread_classifies_selected_conversation() {
        let mut session = Session::default();
        session.load_str("a.json", EXPORT_A).unwrap();
        assert!(session.select("Bob"));

        let thread = session.thread().unwrap();
        assert_eq!(thread.len(), 1);
        assert!(thread[0].is_outgoing);
        assert_eq!(thread[0].category.label(), "video");

        session.deselect();
        assert!(session.thread().is_none());
    }

    #[test]
    fn test_session_uses_configured_hosts() {
        let mut config = ViewerConfig::default();
        config.video_host_prefixes = vec!["https://example.com/v".to_string()];
        let mut session = Session::new(&config);
        session.load_str("a.json", EXPORT_A).unwrap();
        session.select("Bob");

        assert_eq!(session.thread().unwrap()[0].category.label(), "link");
    }

    #[test]
    fn test_successful_load_logs_once_at_debug() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        let mut session = Session::default();
        tracing::subscriber::with_default(subscriber, || {
            session.load_str("a.json", EXPORT_A).unwrap();
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("DEBUG"));
        assert!(lines[0].contains("loaded export"));
    }
}
