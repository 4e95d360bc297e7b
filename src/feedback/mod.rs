//! Structuring and rendering of free-form review feedback.

pub mod classify;
pub mod parser;
pub mod render;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use classify::{classify_category, classify_severity};
pub use parser::parse_feedback;
pub use render::{render, OutputFormat, RenderError};

/// Closed set of feedback categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    General,
    BestPractice,
    Security,
    Performance,
    Readability,
    Bug,
    Suggestion,
}

impl FeedbackCategory {
    /// Stable string tag, matching the serde representation.
    pub fn tag(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::BestPractice => "best_practice",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Readability => "readability",
            Self::Bug => "bug",
            Self::Suggestion => "suggestion",
        }
    }

    /// Human-readable name for rendered output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::BestPractice => "Best Practice",
            Self::Security => "Security",
            Self::Performance => "Performance",
            Self::Readability => "Readability",
            Self::Bug => "Bug",
            Self::Suggestion => "Suggestion",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Closed set of severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn tag(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One structured feedback item extracted from a review paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub category: FeedbackCategory,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(rename = "lineNumber")]
    pub line_number: Option<u32>,
    /// Full paragraph text, whitespace-trimmed.
    pub message: String,
    pub severity: Severity,
}
