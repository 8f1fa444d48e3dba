use super::common::Span;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

// Guard line through the first following terminator line, newline included.
// Whatever precedes the marker on the guard line belongs to the block.
static IFDEF_BLOCK: Lazy<Regex> = Lazy::new(|| block_regex("ifdef"));
static IFNDEF_BLOCK: Lazy<Regex> = Lazy::new(|| block_regex("ifndef"));

fn block_regex(keyword: &str) -> Regex {
    let pattern = format!(r"(?m)^[^\n]*?%#{keyword}[ \t]+(\S+)(?s:.*?)%#endif[^\n]*(?:\n|\z)");
    Regex::new(&pattern).unwrap_or_else(|e| unreachable!("block pattern must compile: {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Ifdef,
    Ifndef,
}

impl DirectiveKind {
    /// Pass order of the conditional engine.
    pub const PASSES: [DirectiveKind; 2] = [DirectiveKind::Ifdef, DirectiveKind::Ifndef];

    pub fn keyword(self) -> &'static str {
        match self {
            DirectiveKind::Ifdef => "ifdef",
            DirectiveKind::Ifndef => "ifndef",
        }
    }

    /// Whether a block of this kind goes away, given whether its guard is defined.
    pub fn removes_block(self, defined: bool) -> bool {
        match self {
            DirectiveKind::Ifdef => !defined,
            DirectiveKind::Ifndef => defined,
        }
    }

    fn block_regex(self) -> &'static Regex {
        match self {
            DirectiveKind::Ifdef => Lazy::force(&IFDEF_BLOCK),
            DirectiveKind::Ifndef => Lazy::force(&IFNDEF_BLOCK),
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%#{}", self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalBlock<'a> {
    pub kind: DirectiveKind,
    pub ident: &'a str,
    pub span: Span,
}

impl ConditionalBlock<'_> {
    pub fn should_remove(&self, defines: &BTreeSet<String>) -> bool {
        self.kind.removes_block(defines.contains(self.ident))
    }
}

/// Locates every block of `kind` in one left-to-right scan.
///
/// Blocks do not nest: a guard pairs with the first `%#endif` after it, and
/// scanning resumes after that terminator line.
pub fn find_blocks(content: &str, kind: DirectiveKind) -> Vec<ConditionalBlock<'_>> {
    kind.block_regex()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let ident = caps.get(1)?;
            Some(ConditionalBlock {
                kind,
                ident: ident.as_str(),
                span: whole.into(),
            })
        })
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockDecision {
    pub remove: Vec<Span>,
    pub kept: usize,
}

pub fn decide_blocks(
    content: &str,
    kind: DirectiveKind,
    defines: &BTreeSet<String>,
) -> BlockDecision {
    let mut decision = BlockDecision::default();
    for block in find_blocks(content, kind) {
        let remove = block.should_remove(defines);
        tracing::trace!(
            kind = %kind,
            ident = block.ident,
            from = block.span.from,
            to = block.span.to,
            remove,
            "conditional block"
        );
        if remove {
            decision.remove.push(block.span);
        } else {
            decision.kept += 1;
        }
    }
    decision
}
