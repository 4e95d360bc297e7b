//! AI-assisted code review pipeline.
//!
//! Two stages around an external review-generation backend:
//!
//! 1. Raw unified-diff text is parsed into per-file hunks
//!    ([`diff::parse_diff`]) and reduced to review-ready change blocks
//!    ([`diff::extract_context`]).
//! 2. The backend's free-form feedback is split into categorized,
//!    severity-ranked items ([`feedback::parse_feedback`]) and rendered as
//!    text, Markdown, or JSON ([`feedback::render`]).
//!
//! Both stages are pure, synchronous transformations over in-memory data;
//! git access and the review backend live in [`sources`] and [`llm`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod diff;
pub mod error;
pub mod feedback;
pub mod history;
pub mod llm;
pub mod sources;

pub use error::AppError;
