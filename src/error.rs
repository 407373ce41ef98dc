//! Typed errors for the load pipeline and its non-fatal fallbacks.
//!
//! Only [`LoadError`] ends an operation. [`TimestampError`] and
//! [`ExtractionError`] are reported by the low-level helpers and turned into
//! fallback values (the unparsable sentinel, the raw content) by their callers,
//! so a bad message never invalidates the rest of a conversation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("export is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("export does not match the chat history schema: {reason}")]
    SchemaMismatch { reason: String },

    #[error("failed to read export file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export file too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl LoadError {
    pub(crate) fn schema(reason: impl Into<String>) -> Self {
        LoadError::SchemaMismatch { reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("unparsable timestamp: {0:?}")]
    Unparsable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no URL found inside bracketed content")]
    UnrecoverableBracketExtraction,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
