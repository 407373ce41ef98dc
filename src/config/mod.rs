//! Viewer configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a JSON file:
//!
//! ```json
//! { "video_host_prefixes": ["https://www.tiktok", "https://youtu.be"], "max_file_size_bytes": 104857600 }
//! ```
//!
//! Fields left out of the file keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default URL prefixes recognized as video platform links
pub const DEFAULT_VIDEO_HOST_PREFIXES: &[&str] =
    &["https://www.tiktok", "https://www.tiktokv", "https://m.tiktok"];

/// Default cap on export file size: 256MB
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lowercase URL prefixes classified as platform video links
    pub video_host_prefixes: Vec<String>,
    pub max_file_size_bytes: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            video_host_prefixes: DEFAULT_VIDEO_HOST_PREFIXES.iter().map(|p| p.to_string()).collect(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        serde_json::from_str(&content)
            .map_err(|source| ConfigError::Invalid { path: path.to_path_buf(), source })
    }

    /// Append extra video host prefixes, skipping blanks and duplicates
    pub fn add_video_hosts<I, S>(&mut self, prefixes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for prefix in prefixes {
            let prefix = prefix.as_ref().trim().to_lowercase();
            if !prefix.is_empty() && !self.video_host_prefixes.contains(&prefix) {
                self.video_host_prefixes.push(prefix);
            }
        }
    }
}
