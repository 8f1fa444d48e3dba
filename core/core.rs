pub mod args;
pub mod config;
pub mod processor;
pub mod stripper;

pub use args::{CliArgs, Command, CompletionArgs, StripArgs};
pub use config::FilterConfig;
pub use processor::{Filter, FilterOutcome, FilterStats, process_stream, strip_text};
pub use stripper::{DirectiveKind, Span, StripError, remove_matches};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Strip(#[from] StripError),
}
