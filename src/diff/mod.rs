//! Diff parsing and review-context extraction.

pub mod context;
pub mod parser;
pub mod stats;

pub use context::{extract_context, ChangeBlock, FileContext};
pub use parser::{parse_diff, FileDiff, Hunk};
pub use stats::DiffStats;
