use crate::config::FilterConfig;
use crate::stripper::{DEFAULT_CLOSE, DEFAULT_OPEN, escape_stray_braces};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

const LONG_ABOUT: &str = "\
Reads text from standard input, removes every region between the opening and
closing delimiters, resolves %#ifdef / %#ifndef blocks against the defined
identifiers, and prints the result to standard output.

Example (default delimiters):

    strip-delimited < input_file.m > output_file.m

Example (custom delimiters %[ and %], with FOO defined):

    strip-delimited -o '%\\[' -c '%\\]' -D FOO < input_file.m > output_file.m

Delimiters are regular expressions. Escape the special characters
.^$*+?\\()[]| with a backslash to match them literally. Braces that do not
form a counted repetition such as {2} or {1,3} match literally.";

#[derive(Debug, Parser, Clone)]
#[clap(
    about = "Strip delimited regions and resolve conditional blocks (main arguments)",
    long_about = "These are the main arguments for filtering standard input."
)]
pub struct StripArgs {
    #[clap(
        short = 'o',
        long = "open",
        value_name = "PATTERN",
        default_value = DEFAULT_OPEN,
        value_parser = parse_pattern,
        help = "Opening delimiter (regular expression)"
    )]
    pub open: String,

    #[clap(
        short = 'c',
        long = "close",
        value_name = "PATTERN",
        default_value = DEFAULT_CLOSE,
        value_parser = parse_pattern,
        help = "Closing delimiter (regular expression)"
    )]
    pub close: String,

    #[clap(
        short = 'D',
        long = "define",
        value_name = "IDENT",
        num_args = 1,
        value_delimiter = ',',
        value_parser = parse_ident,
        action = clap::ArgAction::Append,
        help = "Identifiers treated as defined [repeatable, comma-separated]"
    )]
    pub define: Vec<String>,

    #[clap(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter for stderr output (RUST_LOG takes precedence)"
    )]
    pub log_level: String,
}

impl Default for StripArgs {
    fn default() -> Self {
        StripArgs {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
            define: Vec::new(),
            log_level: "warn".to_string(),
        }
    }
}

impl From<&StripArgs> for FilterConfig {
    fn from(args: &StripArgs) -> Self {
        FilterConfig::default()
            .with_delimiters(args.open.clone(), args.close.clone())
            .with_defines(args.define.iter().cloned())
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "strip-delimited",
    version = "0.1.0",
    about = "Strip delimited regions and conditional blocks from text",
    long_about = LONG_ABOUT,
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: StripArgs,
}

fn parse_pattern(s: &str) -> Result<String> {
    regex::Regex::new(&escape_stray_braces(s))
        .with_context(|| format!("`{s}` is not a valid regular expression"))?;
    Ok(s.to_string())
}

fn parse_ident(s: &str) -> Result<String> {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        anyhow::bail!("identifier must be a single non-empty token, got {s:?}");
    }
    Ok(s.to_string())
}
