//! Splits raw review text into structured feedback items.

use super::{classify_category, classify_severity, FeedbackItem};
use regex::Regex;
use std::sync::LazyLock;

/// Paragraph boundary: two or more consecutive newlines.
static PARAGRAPH_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("invalid paragraph regex"));

/// Quoted file path following "in"/"file"/"for".
static FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:in|file|for)\s+(?:"([^"]+)"|'([^']+)')"#).expect("invalid file regex")
});

/// Line number following "line"/"at line".
static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:at\s+line|line)\s+(\d+)").expect("invalid line regex"));

/// Minimum paragraph length to count as content rather than noise.
const MIN_PARAGRAPH_LEN: usize = 10;

/// Parse raw feedback text into structured items, one per qualifying
/// paragraph, in input order.
pub fn parse_feedback(raw_feedback: &str) -> Vec<FeedbackItem> {
    PARAGRAPH_SPLIT
        .split(raw_feedback)
        .map(str::trim)
        .filter_map(parse_paragraph)
        .collect()
}

/// Turn a single trimmed paragraph into a feedback item.
///
/// Skips paragraphs that are empty, too short, or end with `:` (section
/// headers rather than content).
fn parse_paragraph(paragraph: &str) -> Option<FeedbackItem> {
    if paragraph.len() < MIN_PARAGRAPH_LEN || paragraph.ends_with(':') {
        return None;
    }

    let file_path = FILE_PATTERN.captures(paragraph).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_owned())
    });

    let line_number = LINE_PATTERN
        .captures(paragraph)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    Some(FeedbackItem {
        category: classify_category(paragraph),
        file_path,
        line_number,
        message: paragraph.to_owned(),
        severity: classify_severity(paragraph),
    })
}
