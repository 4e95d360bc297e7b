//! Renders structured feedback items as text, Markdown, or JSON.

use super::{FeedbackCategory, FeedbackItem, Severity};
use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported format: {0}. Expected one of: text, markdown, json")]
    UnsupportedFormat(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(RenderError::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Render feedback items in the requested format.
///
/// Any format tag outside {text, markdown, json} fails with
/// `RenderError::UnsupportedFormat`. Output is deterministic: grouping
/// follows first-seen order, so re-rendering the same items yields
/// byte-identical results.
pub fn render(items: &[FeedbackItem], format: &str) -> Result<String, RenderError> {
    match format.parse::<OutputFormat>()? {
        OutputFormat::Text => Ok(render_text(items)),
        OutputFormat::Markdown => Ok(render_markdown(items)),
        OutputFormat::Json => render_json(items),
    }
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🔴",
        Severity::Medium => "🟠",
        Severity::Low => "🟢",
    }
}

/// Group items by category, preserving first-seen category order.
fn group_by_category(items: &[FeedbackItem]) -> Vec<(FeedbackCategory, Vec<&FeedbackItem>)> {
    let mut groups: Vec<(FeedbackCategory, Vec<&FeedbackItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }

    groups
}

/// Split one category's items into per-file subgroups (first-seen file
/// order) and a trailing group for items without a path.
fn group_by_file<'a>(
    items: &[&'a FeedbackItem],
) -> (Vec<(&'a str, Vec<&'a FeedbackItem>)>, Vec<&'a FeedbackItem>) {
    let mut by_file: Vec<(&str, Vec<&FeedbackItem>)> = Vec::new();
    let mut general = Vec::new();

    for &item in items {
        match item.file_path.as_deref() {
            Some(path) => match by_file.iter_mut().find(|(p, _)| *p == path) {
                Some((_, members)) => members.push(item),
                None => by_file.push((path, vec![item])),
            },
            None => general.push(item),
        }
    }

    (by_file, general)
}

fn render_text(items: &[FeedbackItem]) -> String {
    if items.is_empty() {
        return "No feedback items found.".to_owned();
    }

    let groups = group_by_category(items);
    let mut out = String::from("CODE REVIEW FEEDBACK\n===================\n\n");

    out.push_str("Summary:\n");
    for (category, members) in &groups {
        let _ = writeln!(out, "- {}: {} items", category.display_name(), members.len());
    }

    for (category, members) in &groups {
        let tag = category.tag();
        let _ = write!(out, "\n{}\n{}\n", tag.to_uppercase(), "-".repeat(tag.len()));

        for item in members {
            let mut location = String::new();
            if let Some(ref path) = item.file_path {
                let _ = write!(location, "File: {path}");
            }
            if let Some(line) = item.line_number {
                let _ = write!(location, ", Line: {line}");
            }

            if location.is_empty() {
                let _ = writeln!(out, "[{}]", item.severity.tag().to_uppercase());
            } else {
                let _ = writeln!(out, "[{}] {}", item.severity.tag().to_uppercase(), location);
            }
            out.push_str(&item.message);
            out.push_str("\n\n");
        }
    }

    out
}

fn render_markdown(items: &[FeedbackItem]) -> String {
    if items.is_empty() {
        return "# Code Review Feedback\n\nNo feedback items found.".to_owned();
    }

    let groups = group_by_category(items);
    let mut out = String::from("# Code Review Feedback\n\n");

    out.push_str("## Summary\n");
    for (category, members) in &groups {
        let _ = writeln!(
            out,
            "- **{}**: {} items",
            category.display_name(),
            members.len()
        );
    }

    for (category, members) in &groups {
        let _ = write!(out, "\n## {}\n", category.display_name());

        let (by_file, general) = group_by_file(members);

        for (path, file_items) in &by_file {
            let _ = write!(out, "\n### File: `{path}`\n");

            for item in file_items {
                let marker = severity_marker(item.severity);
                match item.line_number {
                    Some(line) => {
                        let _ = write!(out, "\n#### {marker} Line {line}\n");
                    }
                    None => {
                        let _ = write!(out, "\n#### {marker} Issue\n");
                    }
                }
                out.push_str(&item.message);
                out.push('\n');
            }
        }

        if !general.is_empty() {
            if !by_file.is_empty() {
                out.push_str("\n### General Feedback\n");
            }

            for item in &general {
                let marker = severity_marker(item.severity);
                let mut lines = item.message.lines();
                let summary = lines.next().unwrap_or("Feedback");
                let _ = write!(out, "\n**{marker} {summary}**\n");

                // Remaining lines become the body
                let body: Vec<&str> = lines.collect();
                if !body.is_empty() {
                    out.push('\n');
                    out.push_str(&body.join("\n"));
                    out.push('\n');
                }
            }
        }
    }

    out
}

fn render_json(items: &[FeedbackItem]) -> Result<String, RenderError> {
    let mut categories = serde_json::Map::new();
    for (category, members) in group_by_category(items) {
        categories.insert(category.tag().to_owned(), members.len().into());
    }

    let document = serde_json::json!({
        "summary": {
            "totalItems": items.len(),
            "categories": categories,
        },
        "items": items,
    });

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(
        category: FeedbackCategory,
        file_path: Option<&str>,
        line_number: Option<u32>,
        message: &str,
        severity: Severity,
    ) -> FeedbackItem {
        FeedbackItem {
            category,
            file_path: file_path.map(str::to_owned),
            line_number,
            message: message.to_owned(),
            severity,
        }
    }

    fn sample_items() -> Vec<FeedbackItem> {
        vec![
            item(
                FeedbackCategory::Bug,
                Some("src/lib.rs"),
                Some(10),
                "Possible crash when the input is empty.",
                Severity::High,
            ),
            item(
                FeedbackCategory::Readability,
                None,
                None,
                "Naming is confusing here.\nPick something descriptive.",
                Severity::Low,
            ),
            item(
                FeedbackCategory::Bug,
                Some("src/lib.rs"),
                None,
                "Off-by-one in the loop bound.",
                Severity::Medium,
            ),
        ]
    }

    #[test]
    fn test_unsupported_format_fails() {
        let err = render(&[], "bogus").unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(_)));

        let err = render(&sample_items(), "yaml").unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_empty_json_is_well_formed() {
        let out = render(&[], "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["totalItems"], 0);
        assert!(value["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_text_and_markdown() {
        assert_eq!(render(&[], "text").unwrap(), "No feedback items found.");
        assert!(render(&[], "markdown")
            .unwrap()
            .contains("No feedback items found."));
    }

    #[test]
    fn test_text_summary_and_sections() {
        let out = render(&sample_items(), "text").unwrap();
        assert!(out.starts_with("CODE REVIEW FEEDBACK"));
        assert!(out.contains("- Bug: 2 items"));
        assert!(out.contains("- Readability: 1 items"));
        assert!(out.contains("[HIGH] File: src/lib.rs, Line: 10"));
        assert!(out.contains("BUG\n---"));
    }

    #[test]
    fn test_markdown_groups_by_category_then_file() {
        let out = render(&sample_items(), "markdown").unwrap();
        assert!(out.contains("## Bug"));
        assert!(out.contains("### File: `src/lib.rs`"));
        assert!(out.contains("#### 🔴 Line 10"));
        assert!(out.contains("#### 🟠 Issue"));
        // Pathless readability item renders first line bold, rest as body
        assert!(out.contains("**🟢 Naming is confusing here.**"));
        assert!(out.contains("Pick something descriptive."));
    }

    #[test]
    fn test_category_order_is_first_seen() {
        let out = render(&sample_items(), "text").unwrap();
        let bug_pos = out.find("- Bug").unwrap();
        let readability_pos = out.find("- Readability").unwrap();
        assert!(bug_pos < readability_pos);
    }

    #[test]
    fn test_json_summary_counts() {
        let out = render(&sample_items(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["totalItems"], 3);
        assert_eq!(value["summary"]["categories"]["bug"], 2);
        assert_eq!(value["summary"]["categories"]["readability"], 1);
        assert_eq!(value["items"][0]["category"], "bug");
        assert_eq!(value["items"][0]["filePath"], "src/lib.rs");
        assert_eq!(value["items"][0]["severity"], "high");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let items = sample_items();
        for format in ["text", "markdown", "json"] {
            let first = render(&items, format).unwrap();
            let second = render(&items, format).unwrap();
            assert_eq!(first, second, "format {format} not byte-identical");
        }
    }
}
