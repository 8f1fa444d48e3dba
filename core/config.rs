use crate::stripper::{DEFAULT_CLOSE, DEFAULT_OPEN};

/// Everything one filter run depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Regex fragment opening a stripped region.
    pub open: String,
    /// Regex fragment closing a stripped region.
    pub close: String,
    /// Identifiers treated as defined by `%#ifdef` / `%#ifndef`.
    pub defines: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
            defines: Vec::new(),
        }
    }
}

impl FilterConfig {
    pub fn with_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    pub fn with_define(mut self, ident: impl Into<String>) -> Self {
        self.defines.push(ident.into());
        self
    }

    pub fn with_defines<I, S>(mut self, idents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defines.extend(idents.into_iter().map(Into::into));
        self
    }
}
