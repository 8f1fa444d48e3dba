use super::common::{Span, find_spans};
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^\n]*%#(?:ifdef|ifndef|endif)[^\n]*(?:\n|\z)")
        .unwrap_or_else(|e| unreachable!("marker pattern must compile: {e}"))
});

/// Whole lines, newline included, that still carry a directive marker.
pub fn find_marker_lines(content: &str) -> Vec<Span> {
    find_spans(&MARKER_LINE, content)
}
