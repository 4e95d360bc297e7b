use serde::{Deserialize, Serialize};

/// A single hunk within a file diff.
///
/// The header counts are advisory: they are carried for re-display and are
/// never cross-checked against `lines.len()`. Each line keeps its origin
/// marker (`+`, `-`, or space) exactly as it appeared in the diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunk {
    #[serde(rename = "oldStart")]
    pub old_start: u32,
    #[serde(rename = "oldCount")]
    pub old_count: u32,
    #[serde(rename = "newStart")]
    pub new_start: u32,
    #[serde(rename = "newCount")]
    pub new_count: u32,
    pub lines: Vec<String>,
}

/// The parsed diff for a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDiff {
    /// Path from the pre-image (`a/`) side of the file header.
    pub path: String,
    #[serde(rename = "isNew")]
    pub is_new: bool,
    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,
    pub hunks: Vec<Hunk>,
}

/// Parse raw `git diff` output into per-file diffs with ordered hunks.
///
/// Never fails: malformed or empty input yields an empty vector, or partial
/// records missing whatever the scan never encountered. Lines before the
/// first `diff --git` header are ignored, as are stray lines between a file
/// header and its first hunk (`--- a/...`, `+++ b/...`, index lines,
/// binary-file markers).
pub fn parse_diff(diff_text: &str) -> Vec<FileDiff> {
    let mut file_diffs: Vec<FileDiff> = Vec::new();
    let mut current_file: Option<FileDiff> = None;

    for line in diff_text.lines() {
        if let Some(path) = parse_file_header(line) {
            if let Some(file) = current_file.take() {
                file_diffs.push(file);
            }
            current_file = Some(FileDiff {
                path: path.to_owned(),
                is_new: false,
                is_deleted: false,
                hunks: Vec::new(),
            });
            continue;
        }

        let Some(file) = current_file.as_mut() else {
            continue;
        };

        if line.starts_with("new file mode") {
            file.is_new = true;
            continue;
        }
        if line.starts_with("deleted file mode") {
            file.is_deleted = true;
            continue;
        }

        if let Some((old_start, old_count, new_start, new_count)) = parse_hunk_header(line) {
            file.hunks.push(Hunk {
                old_start,
                old_count,
                new_start,
                new_count,
                lines: Vec::new(),
            });
            continue;
        }

        // Any other line belongs to the open hunk, verbatim.
        if let Some(hunk) = file.hunks.last_mut() {
            hunk.lines.push(line.to_owned());
        }
    }

    if let Some(file) = current_file {
        file_diffs.push(file);
    }

    log::debug!("parsed {} file diff(s)", file_diffs.len());
    file_diffs
}

/// Extract the pre-image path from a `diff --git a/<old> b/<new>` header.
fn parse_file_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("diff --git a/")?;
    // The pre-image path ends where " b/" begins.
    let idx = rest.find(" b/")?;
    Some(&rest[..idx])
}

/// Parse `@@ -old_start[,old_count] +new_start[,new_count] @@ ...`.
/// Omitted counts default to 1.
fn parse_hunk_header(line: &str) -> Option<(u32, u32, u32, u32)> {
    let rest = line.strip_prefix("@@ -")?;
    let (old, rest) = rest.split_once(" +")?;
    let (new, trailer) = rest.split_once(" @@")?;
    let _ = trailer;

    let (old_start, old_count) = parse_range(old)?;
    let (new_start, new_count) = parse_range(new)?;

    Some((old_start, old_count, new_start, new_count))
}

fn parse_range(range: &str) -> Option<(u32, u32)> {
    if let Some((start, count)) = range.split_once(',') {
        Some((start.parse().ok()?, count.parse().ok()?))
    } else {
        // Single line: "5" means line 5, count 1
        Some((range.parse().ok()?, 1))
    }
}
