//! Loading and normalization of direct-message export documents
//!
//! # Error Handling Strategy
//!
//! Loading is **all-or-nothing**:
//!
//! - **Document-level failures**: Text that is not JSON fails with `MalformedJson`; JSON
//!   without the `DirectMessage → DirectMessages → ChatHistory` path, or with a
//!   conversation that is not a list of message objects, fails with `SchemaMismatch`.
//!   No partial index is ever returned.
//!
//! - **Field-level leniency**: Missing or `null` message fields read as empty strings.
//!   Unparsable dates are kept verbatim and only resolved to a sentinel when ranked
//!   or displayed.
//!
//! - **Normalization never fails**: Peer key cleanup is best-effort, and key collisions
//!   are resolved last-write-wins with a `tracing` warning.

pub mod deserializers;
pub mod loader;
pub mod normalizer;

pub use loader::{load_chat_history, load_export, load_export_file};
pub use normalizer::{normalize_chat_history, normalize_peer_key};
