//! Timestamped JSON history of completed reviews.

use crate::feedback::FeedbackItem;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One completed review run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub target_branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_branch: Option<String>,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub format: String,
    /// The rendered output exactly as presented to the user.
    pub rendered: String,
    pub items: Vec<FeedbackItem>,
    /// ISO-8601 local timestamp.
    pub created_at: String,
}

impl ReviewRecord {
    /// Stamp a record with the current local time.
    pub fn stamped(
        target_branch: impl Into<String>,
        current_branch: Option<String>,
        provider: impl Into<String>,
        model: Option<String>,
        format: impl Into<String>,
        rendered: impl Into<String>,
        items: Vec<FeedbackItem>,
    ) -> Self {
        Self {
            target_branch: target_branch.into(),
            current_branch,
            provider: provider.into(),
            model,
            format: format.into(),
            rendered: rendered.into(),
            items,
            created_at: Local::now().to_rfc3339(),
        }
    }
}

/// Save a review record under `output_dir` (or `./history` when `None`).
///
/// Files are named `review_history_YYYYMMDD_HHMMSS.json`. Returns the path
/// of the written file.
pub fn save_review_history(
    record: &ReviewRecord,
    output_dir: Option<&Path>,
) -> Result<PathBuf, StorageError> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from("history"),
    };
    fs::create_dir_all(&dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("review_history_{timestamp}.json"));

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)?;

    log::debug!("saved review history to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{FeedbackCategory, Severity};

    fn sample_record() -> ReviewRecord {
        ReviewRecord::stamped(
            "main",
            Some("feature".to_owned()),
            "claude",
            Some("sonnet".to_owned()),
            "markdown",
            "# Code Review Feedback",
            vec![FeedbackItem {
                category: FeedbackCategory::Bug,
                file_path: Some("src/lib.rs".to_owned()),
                line_number: Some(3),
                message: "Possible crash.".to_owned(),
                severity: Severity::High,
            }],
        )
    }

    #[test]
    fn test_history_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_review_history(&sample_record(), Some(dir.path())).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("review_history_"));
        assert!(name.ends_with(".json"));

        let content = fs::read_to_string(&path).unwrap();
        let loaded: ReviewRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.target_branch, "main");
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].category, FeedbackCategory::Bug);
    }

    #[test]
    fn test_history_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = save_review_history(&sample_record(), Some(&nested)).unwrap();
        assert!(path.exists());
    }
}
