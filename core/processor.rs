use crate::CoreError;
use crate::config::FilterConfig;
use crate::stripper::{
    DelimiterPair, DirectiveKind, StripError, decide_blocks, find_marker_lines, remove_matches,
};
use std::collections::BTreeSet;
use std::io::{Read, Write};

/// Counts gathered while filtering one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub regions_removed: usize,
    pub blocks_removed: usize,
    pub blocks_kept: usize,
    pub marker_lines_removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub text: String,
    pub stats: FilterStats,
}

/// A compiled [`FilterConfig`], reusable across inputs.
#[derive(Debug, Clone)]
pub struct Filter {
    delimiters: DelimiterPair,
    defines: BTreeSet<String>,
}

impl Filter {
    pub fn new(config: &FilterConfig) -> Result<Self, StripError> {
        Ok(Filter {
            delimiters: DelimiterPair::new(&config.open, &config.close)?,
            defines: config.defines.iter().cloned().collect(),
        })
    }

    /// Delimited regions, then `%#ifdef` blocks, then `%#ifndef` blocks, then
    /// leftover directive lines. Each stage sees the previous stage's output.
    pub fn apply(&self, input: &str) -> Result<FilterOutcome, StripError> {
        let mut stats = FilterStats::default();

        let regions = self.delimiters.find_regions(input);
        stats.regions_removed = regions.len();
        let mut text = remove_matches(input, regions)?;
        tracing::debug!(
            removed = stats.regions_removed,
            open = self.delimiters.open(),
            close = self.delimiters.close(),
            "delimiter pass"
        );

        for kind in DirectiveKind::PASSES {
            let decision = decide_blocks(&text, kind, &self.defines);
            tracing::debug!(
                kind = %kind,
                removed = decision.remove.len(),
                kept = decision.kept,
                "conditional pass"
            );
            stats.blocks_removed += decision.remove.len();
            stats.blocks_kept += decision.kept;
            text = remove_matches(&text, decision.remove)?;
        }

        let markers = find_marker_lines(&text);
        stats.marker_lines_removed = markers.len();
        text = remove_matches(&text, markers)?;
        tracing::debug!(removed = stats.marker_lines_removed, "marker cleanup");

        Ok(FilterOutcome { text, stats })
    }
}

pub fn strip_text(input: &str, config: &FilterConfig) -> Result<String, StripError> {
    Ok(Filter::new(config)?.apply(input)?.text)
}

/// Reads `reader` to the end, filters it, and writes the result to `writer` in one go.
pub fn process_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &FilterConfig,
) -> Result<FilterStats, CoreError> {
    let filter = Filter::new(config)?;

    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    tracing::debug!(bytes = input.len(), "input read");

    let outcome = filter.apply(&input)?;
    writer.write_all(outcome.text.as_bytes())?;
    writer.flush()?;
    tracing::info!(
        regions_removed = outcome.stats.regions_removed,
        blocks_removed = outcome.stats.blocks_removed,
        blocks_kept = outcome.stats.blocks_kept,
        marker_lines_removed = outcome.stats.marker_lines_removed,
        bytes_in = input.len(),
        bytes_out = outcome.text.len(),
        "filtered"
    );
    Ok(outcome.stats)
}
