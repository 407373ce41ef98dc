use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_VIDEO_HOST_PREFIXES;
use crate::error::ExtractionError;

const BRACKETED_MEDIA_MARKER: &str = "[https://";
const LINK_PREFIXES: &[&str] = &["https://", "http://", "www."];

static BRACKETED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(https?://[^\]]+)\]").expect("bracketed URL pattern is valid")
});

/// Content that opens with `[https://` once trimmed (case-sensitive)
pub fn is_bracketed_media(content: &str) -> bool {
    content.trim().starts_with(BRACKETED_MEDIA_MARKER)
}

/// Pull the first `[http(s)://...]` URL out of the content
pub fn extract_bracketed_url(content: &str) -> Result<&str, ExtractionError> {
    BRACKETED_URL
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ExtractionError::UnrecoverableBracketExtraction)
}

/// Content that starts with `https://`, `http://` or `www.`, ignoring case and surrounding whitespace
pub fn is_link(content: &str) -> bool {
    let folded = content.trim().to_lowercase();
    LINK_PREFIXES.iter().any(|prefix| folded.starts_with(prefix))
}

/// URL prefixes that mark a link as a video platform link.
///
/// Prefixes are stored lowercase and matched against the trimmed, lowercased
/// content, so adding a host is a data change only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHostPrefixes {
    prefixes: Vec<String>,
}

impl VideoHostPrefixes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { prefixes }
    }

    pub fn matches(&self, content: &str) -> bool {
        let folded = content.trim().to_lowercase();
        self.prefixes.iter().any(|prefix| folded.starts_with(prefix.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for VideoHostPrefixes {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_HOST_PREFIXES)
    }
}
