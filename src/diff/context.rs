use super::parser::FileDiff;
use serde::{Deserialize, Serialize};

/// A reviewable block of diff lines anchored at its post-image line number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeBlock {
    #[serde(rename = "startLine")]
    pub start_line: u32,
    pub lines: Vec<String>,
}

/// Review-ready context for one file.
///
/// Results are kept in a `Vec` rather than a map so iteration order always
/// matches the order of the input `FileDiff`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContext {
    pub path: String,
    #[serde(rename = "isNewFile")]
    pub is_new_file: bool,
    pub changes: Vec<ChangeBlock>,
}

/// Extract review-ready change blocks from parsed file diffs.
///
/// Deleted files are skipped. Per hunk, `---`/`+++` metadata lines are
/// stripped; a `ChangeBlock` is emitted only when at least one line
/// survives. A file appears in the result only when it produced at least
/// one block.
///
/// `context_lines` is accepted for interface stability but performs no
/// windowing: the full hunk content is passed through.
pub fn extract_context(file_diffs: &[FileDiff], context_lines: u32) -> Vec<FileContext> {
    let _ = context_lines;

    let mut contexts = Vec::new();

    for file_diff in file_diffs {
        // Deleted files don't need review
        if file_diff.is_deleted {
            continue;
        }

        let mut changes = Vec::new();
        for hunk in &file_diff.hunks {
            let lines: Vec<String> = hunk
                .lines
                .iter()
                .filter(|line| !(line.starts_with("---") || line.starts_with("+++")))
                .cloned()
                .collect();

            if !lines.is_empty() {
                changes.push(ChangeBlock {
                    start_line: hunk.new_start,
                    lines,
                });
            }
        }

        if !changes.is_empty() {
            contexts.push(FileContext {
                path: file_diff.path.clone(),
                is_new_file: file_diff.is_new,
                changes,
            });
        }
    }

    contexts
}
