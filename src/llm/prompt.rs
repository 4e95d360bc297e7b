//! Builds the review prompt from extracted code context.

use crate::diff::FileContext;
use std::fmt::Write;

/// Build the code-review prompt sent to the generation backend.
///
/// One `## File:` section per file in context order, each change block
/// fenced and anchored at its starting line, followed by the review
/// instructions.
pub fn build_review_prompt(contexts: &[FileContext]) -> String {
    let mut prompt = String::from("Please review the following code changes:\n");

    for context in contexts {
        let _ = write!(prompt, "\n## File: {}\n", context.path);
        if context.is_new_file {
            prompt.push_str("(New file)\n");
        }

        for change in &context.changes {
            let _ = write!(prompt, "\nStarting at line {}:\n```\n", change.start_line);
            for line in &change.lines {
                prompt.push_str(line);
                prompt.push('\n');
            }
            prompt.push_str("```\n");
        }
    }

    prompt.push_str(
        "\n\nPlease provide a code review that includes:\n\
         1. Overall assessment of the changes\n\
         2. Specific issues or concerns\n\
         3. Suggestions for improvement\n\
         4. Best practices that should be followed\n\
         5. Any potential bugs or edge cases\n\
         \n\
         Separate each point of feedback with a blank line, and reference \
         file paths in quotes and line numbers where relevant.",
    );

    prompt
}
