use serde::Serialize;

/// Added/removed line counts for a raw diff.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DiffStats {
    pub added: u32,
    pub removed: u32,
}

impl DiffStats {
    /// Count added and removed lines in raw diff text, excluding the
    /// `+++`/`---` file header lines.
    pub fn from_diff(diff_text: &str) -> Self {
        let mut stats = Self::default();

        for line in diff_text.lines() {
            if line.starts_with('+') && !line.starts_with("+++") {
                stats.added += 1;
            } else if line.starts_with('-') && !line.starts_with("---") {
                stats.removed += 1;
            }
        }

        stats
    }

    pub fn total_changes(&self) -> u32 {
        self.added + self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_exclude_file_headers() {
        let diff = "\
--- a/foo.rs
+++ b/foo.rs
@@ -1,3 +1,3 @@
 context
-removed one
+added one
+added two";
        let stats = DiffStats::from_diff(diff);
        assert_eq!(stats.added, 2);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.total_changes(), 3);
    }

    #[test]
    fn test_empty_diff() {
        let stats = DiffStats::from_diff("");
        assert_eq!(stats.total_changes(), 0);
    }
}
