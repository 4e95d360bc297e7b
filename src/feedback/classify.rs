//! Weighted keyword classifier for feedback text.
//!
//! Pure scoring over static lexicon tables: each keyword that occurs as a
//! substring of the lowercased input contributes its weight once, the
//! strictly-highest total wins, and ties (including all-zero) fall back to
//! the default. The word lists are tunable data, not part of the contract;
//! vocabulary deliberately overlaps across tables (e.g. "consider" scores
//! for both the suggestion category and medium severity).

use super::{FeedbackCategory, Severity};

type Lexicon = &'static [(&'static str, f32)];

const SECURITY_TERMS: Lexicon = &[
    ("security", 3.0),
    ("vulnerability", 3.0),
    ("exploit", 3.0),
    ("injection", 3.0),
    ("attack", 2.5),
    ("credential", 2.5),
    ("unsafe", 2.0),
    ("sanitize", 2.0),
];

const PERFORMANCE_TERMS: Lexicon = &[
    ("performance", 3.0),
    ("optimization", 2.5),
    ("allocation", 2.0),
    ("slow", 2.0),
    ("efficient", 2.0),
    ("latency", 2.0),
    ("speed", 1.5),
];

const BUG_TERMS: Lexicon = &[
    ("bug", 3.0),
    ("crash", 3.0),
    ("race condition", 3.0),
    ("incorrect", 2.5),
    ("off-by-one", 2.5),
    ("panic", 2.5),
    ("error", 2.0),
    ("exception", 2.0),
    ("fix", 1.5),
];

const READABILITY_TERMS: Lexicon = &[
    ("readability", 3.0),
    ("confusing", 2.5),
    ("unclear", 2.5),
    ("clarity", 2.0),
    ("naming", 2.0),
    ("comment", 1.5),
    ("indentation", 1.5),
];

const BEST_PRACTICE_TERMS: Lexicon = &[
    ("practice", 2.5),
    ("convention", 2.5),
    ("idiomatic", 2.5),
    ("standard", 2.0),
    ("pattern", 1.5),
    ("approach", 1.0),
];

const SUGGESTION_TERMS: Lexicon = &[
    ("suggest", 1.5),
    ("recommend", 1.5),
    ("consider", 1.0),
    ("perhaps", 1.0),
    ("might", 0.5),
    ("could", 0.5),
];

/// Category tables in tie-break order: earlier entries win equal scores.
const CATEGORY_LEXICONS: &[(FeedbackCategory, Lexicon)] = &[
    (FeedbackCategory::Security, SECURITY_TERMS),
    (FeedbackCategory::Performance, PERFORMANCE_TERMS),
    (FeedbackCategory::Bug, BUG_TERMS),
    (FeedbackCategory::Readability, READABILITY_TERMS),
    (FeedbackCategory::BestPractice, BEST_PRACTICE_TERMS),
    (FeedbackCategory::Suggestion, SUGGESTION_TERMS),
];

const HIGH_TERMS: Lexicon = &[
    ("critical", 3.0),
    ("severe", 3.0),
    ("major", 2.5),
    ("dangerous", 2.5),
    ("important", 2.0),
    ("significant", 2.0),
    ("must", 1.5),
];

const MEDIUM_TERMS: Lexicon = &[
    ("moderate", 1.5),
    ("consider", 1.0),
    ("should", 1.0),
    ("recommend", 1.0),
];

const LOW_TERMS: Lexicon = &[
    ("minor", 2.0),
    ("trivial", 2.0),
    ("nit", 2.0),
    ("cosmetic", 2.0),
    ("style", 1.5),
    ("suggestion", 1.0),
];

const SEVERITY_LEXICONS: &[(Severity, Lexicon)] = &[
    (Severity::High, HIGH_TERMS),
    (Severity::Medium, MEDIUM_TERMS),
    (Severity::Low, LOW_TERMS),
];

/// Sum the weights of every keyword present in the (already lowercased)
/// text. Presence counts once regardless of how often a keyword repeats.
fn score_lexicon(lowered: &str, lexicon: Lexicon) -> f32 {
    lexicon
        .iter()
        .filter(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, weight)| weight)
        .sum()
}

/// Classify feedback text into a category.
///
/// The category with the strictly greatest score wins; ties and an
/// all-zero score resolve to `General`.
pub fn classify_category(text: &str) -> FeedbackCategory {
    let lowered = text.to_lowercase();

    let mut best = FeedbackCategory::General;
    let mut best_score = 0.0_f32;
    for &(category, lexicon) in CATEGORY_LEXICONS {
        let score = score_lexicon(&lowered, lexicon);
        if score > best_score {
            best = category;
            best_score = score;
        }
    }
    best
}

/// Classify feedback text into a severity level, defaulting to `Medium`.
pub fn classify_severity(text: &str) -> Severity {
    let lowered = text.to_lowercase();

    let mut best = Severity::Medium;
    let mut best_score = 0.0_f32;
    for &(severity, lexicon) in SEVERITY_LEXICONS {
        let score = score_lexicon(&lowered, lexicon);
        if score > best_score {
            best = severity;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_dominates_bug_terms() {
        assert_eq!(
            classify_category("This is a critical security vulnerability"),
            FeedbackCategory::Security
        );
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert_eq!(
            classify_category("SECURITY: SQL INJECTION in the login handler"),
            FeedbackCategory::Security
        );
    }

    #[test]
    fn test_unmatched_text_defaults_to_general() {
        assert_eq!(
            classify_category("The weather is nice today"),
            FeedbackCategory::General
        );
        assert_eq!(classify_category(""), FeedbackCategory::General);
    }

    #[test]
    fn test_keyword_counts_once_per_call() {
        // "slow" three times still scores 2.0, which loses to the single
        // occurrence of "performance" (3.0) plus nothing else.
        assert_eq!(
            classify_category("slow slow slow performance"),
            FeedbackCategory::Performance
        );
    }

    #[test]
    fn test_readability_wins_over_suggestion_on_mixed_text() {
        let text = "Consider renaming this variable for clarity";
        assert_eq!(classify_category(text), FeedbackCategory::Readability);
    }

    #[test]
    fn test_severity_defaults_to_medium() {
        assert_eq!(classify_severity("the weather is nice"), Severity::Medium);
        assert_eq!(classify_severity(""), Severity::Medium);
    }

    #[test]
    fn test_severity_buckets() {
        assert_eq!(
            classify_severity("This is a critical flaw that must be fixed"),
            Severity::High
        );
        assert_eq!(classify_severity("minor style nit"), Severity::Low);
        assert_eq!(
            classify_severity("You should consider extracting this"),
            Severity::Medium
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Consider renaming this variable for clarity, as suggested.";
        let first = (classify_category(text), classify_severity(text));
        let second = (classify_category(text), classify_severity(text));
        assert_eq!(first, second);
    }
}
