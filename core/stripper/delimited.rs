use super::common::{Span, StripError, compile, escape_stray_braces, find_spans};
use regex::Regex;

pub const DEFAULT_OPEN: &str = "%#{";
pub const DEFAULT_CLOSE: &str = "%#}";

/// Compiled open/close pattern pair.
///
/// Both fragments are regular expressions. Only braces that cannot form a
/// counted repetition are escaped; every other metacharacter is left as given.
/// A region runs from an OPEN match to the nearest following CLOSE match,
/// across lines, plus at most one whitespace character after CLOSE.
#[derive(Debug, Clone)]
pub struct DelimiterPair {
    open: String,
    close: String,
    region: Regex,
}

impl DelimiterPair {
    pub fn new(open: &str, close: &str) -> Result<Self, StripError> {
        let open_re = escape_stray_braces(open);
        let close_re = escape_stray_braces(close);
        compile("open", &open_re)?;
        compile("close", &close_re)?;
        let region = compile(
            "delimiter",
            &format!(r"(?s)(?:{open_re}).*?(?:{close_re})\s?"),
        )?;
        Ok(DelimiterPair {
            open: open.to_string(),
            close: close.to_string(),
            region,
        })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn find_regions(&self, content: &str) -> Vec<Span> {
        let regions = find_spans(&self.region, content);
        for r in &regions {
            tracing::trace!(from = r.from, to = r.to, "delimited region");
        }
        regions
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        DelimiterPair::new(DEFAULT_OPEN, DEFAULT_CLOSE)
            .unwrap_or_else(|e| unreachable!("default delimiters must compile: {e}"))
    }
}
