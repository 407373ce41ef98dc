//! DM Explorer - Browse direct-message history from a personal data export
//!
//! This library turns a loosely structured export document into a validated
//! in-memory conversation model and classifies messages for rendering. It supports:
//!
//! - Loading the `DirectMessage → DirectMessages → ChatHistory` node of an export
//! - Normalizing `"Chat History with NAME:"` keys into peer names
//! - Case-insensitive search over peer names and message content
//! - Ranking conversations by most recent activity
//! - Classifying messages as text, bracketed media, video platform links or generic links
//!
//! # Example
//!
//! ```no_run
//! use dm_explorer::Session;
//! use std::path::Path;
//!
//! let mut session = Session::default();
//! session.load_file(Path::new("user_data.json"))?;
//! session.set_query("tiktok");
//! for entry in session.inbox() {
//!     println!("{}: {}", entry.peer, entry.preview);
//! }
//! # Ok::<(), dm_explorer::LoadError>(())
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod ranking;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use classifier::{Classifier, classify};
pub use config::ViewerConfig;
pub use error::LoadError;
pub use filters::filter_conversations;
pub use models::{ClassifiedMessage, Conversation, ConversationIndex, MessageCategory, PeerId, Timestamp};
pub use parsers::{load_chat_history, load_export, normalize_chat_history, normalize_peer_key};
pub use ranking::rank_conversations;
pub use session::Session;
pub use utils::format_path_with_tilde;
