use once_cell::sync::Lazy;
use regex::Regex;

static COUNTED_REPETITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{[0-9]+(?:,[0-9]*)?\}")
        .unwrap_or_else(|e| unreachable!("repetition pattern must compile: {e}"))
});

#[derive(thiserror::Error, Debug)]
pub enum StripError {
    #[error("invalid {which} pattern: {source}")]
    InvalidPattern {
        which: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("span {from}..{to} is out of bounds or splits a character (text length {len})")]
    OutOfBounds { from: usize, to: usize, len: usize },

    #[error("span starting at {from} overlaps the previous span ending at {last_to}")]
    Overlapping { from: usize, last_to: usize },
}

/// Half-open byte range `from..to` over a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub fn new(from: usize, to: usize) -> Self {
        Span { from, to }
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Span::new(m.start(), m.end())
    }
}

pub(crate) fn compile(which: &'static str, pattern: &str) -> Result<Regex, StripError> {
    Regex::new(pattern).map_err(|source| StripError::InvalidPattern { which, source })
}

/// Escapes every `{` and `}` that is not part of a `{n}`, `{n,}` or `{n,m}`
/// repetition, so a brace that cannot be a quantifier matches literally.
///
/// Escape sequences are copied as they are, including `\p{..}` and `\x{..}`.
pub fn escape_stray_braces(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + 4);
    let mut rest = fragment;
    while let Some(c) = rest.chars().next() {
        let taken = match c {
            '\\' => match rest[1..].chars().next() {
                Some('p' | 'P' | 'x') if rest[2..].starts_with('{') => {
                    rest.find('}').map_or(rest.len(), |i| i + 1)
                }
                Some(e) => 1 + e.len_utf8(),
                None => 1,
            },
            '{' => match COUNTED_REPETITION.find(rest) {
                Some(m) => m.end(),
                None => {
                    out.push_str(r"\{");
                    rest = &rest[1..];
                    continue;
                }
            },
            '}' => {
                out.push_str(r"\}");
                rest = &rest[1..];
                continue;
            }
            _ => c.len_utf8(),
        };
        out.push_str(&rest[..taken]);
        rest = &rest[taken..];
    }
    out
}

/// Every non-overlapping match of `re` in `input`, left to right.
pub(crate) fn find_spans(re: &Regex, input: &str) -> Vec<Span> {
    re.find_iter(input).map(Span::from).collect()
}

/// Drops every span from `input` and returns the concatenation of what is left.
///
/// Spans may arrive in any order but must not overlap. Empty spans are ignored.
pub fn remove_matches(input: &str, mut spans: Vec<Span>) -> Result<String, StripError> {
    if spans.is_empty() {
        return Ok(input.to_string());
    }
    check_spans_bounds(input, &spans)?;

    spans.sort();
    check_sorted_spans_overlap(&spans)?;

    let removed: usize = spans.iter().map(Span::len).sum();
    let mut out = String::with_capacity(input.len() - removed);
    let mut cursor = 0;
    for s in spans.iter().filter(|s| !s.is_empty()) {
        out.push_str(&input[cursor..s.from]);
        cursor = s.to;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

fn check_spans_bounds(input: &str, spans: &[Span]) -> Result<(), StripError> {
    let len = input.len();
    for s in spans {
        if s.from > len
            || s.to > len
            || s.from > s.to
            || !input.is_char_boundary(s.from)
            || !input.is_char_boundary(s.to)
        {
            tracing::warn!(from = s.from, to = s.to, len, "rejecting span");
            return Err(StripError::OutOfBounds {
                from: s.from,
                to: s.to,
                len,
            });
        }
    }
    Ok(())
}

fn check_sorted_spans_overlap(spans: &[Span]) -> Result<(), StripError> {
    let mut last_to = 0;
    for s in spans {
        if s.from < last_to {
            tracing::warn!(from = s.from, last_to, "overlapping spans");
            return Err(StripError::Overlapping {
                from: s.from,
                last_to,
            });
        }
        last_to = s.to;
    }
    Ok(())
}
