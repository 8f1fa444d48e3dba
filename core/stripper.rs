pub mod common;
pub mod conditional;
pub mod delimited;
pub mod markers;

pub use common::{Span, StripError, escape_stray_braces, remove_matches};
pub use conditional::{BlockDecision, ConditionalBlock, DirectiveKind, decide_blocks, find_blocks};
pub use delimited::{DEFAULT_CLOSE, DEFAULT_OPEN, DelimiterPair};
pub use markers::find_marker_lines;
