//! Message classification for rendering.
//!
//! Classification is pure and total: every string, including the empty one,
//! maps to exactly one [`MessageCategory`](crate::models::MessageCategory).
//! Results are recomputed per render rather than cached.

pub mod classify;
pub mod rules;

pub use classify::{Classifier, classify};
pub use rules::{VideoHostPrefixes, extract_bracketed_url, is_bracketed_media, is_link};
