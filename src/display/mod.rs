//! Human-readable rendering helpers for the presentation layer

pub mod timestamps;

pub use timestamps::{UNKNOWN_DATE, format_date, format_inbox_time};

/// Shorten text to at most `max_chars` characters on one line, marking cuts with `…`
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }

    let mut truncated: String = single_line.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
