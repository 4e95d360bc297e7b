//! Review generation backends.
//!
//! A single capability interface (`ReviewGenerator`) with interchangeable
//! implementations selected by provider name.

pub mod command;
pub mod prompt;

use crate::diff::FileContext;
use std::path::Path;
use thiserror::Error;

pub use command::{check_claude_available, ClaudeCli, CustomCommand};
pub use prompt::build_review_prompt;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Claude CLI not found. Install from https://claude.ai/code")]
    CliNotFound,
    #[error("Review command failed: {0}")]
    CommandFailed(String),
    #[error("Empty response from review backend")]
    EmptyResponse,
    #[error("Unsupported provider: {0}. Expected one of: claude, command")]
    UnsupportedProvider(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability interface: can generate a review given code context.
pub trait ReviewGenerator: std::fmt::Debug {
    fn generate_review(&self, contexts: &[FileContext]) -> Result<String, LlmError>;
}

/// Default model used when the caller doesn't pick one.
pub const DEFAULT_MODEL: &str = "sonnet";

/// Select a review generation client by provider name.
///
/// `claude` uses the claude CLI with the given model; `command` runs the
/// supplied custom command line. Anything else fails with
/// `UnsupportedProvider`.
pub fn client_for_provider(
    provider: &str,
    model: Option<&str>,
    custom_command: Option<&str>,
    cwd: &Path,
) -> Result<Box<dyn ReviewGenerator>, LlmError> {
    match provider {
        "claude" => Ok(Box::new(ClaudeCli::new(
            model.unwrap_or(DEFAULT_MODEL),
            cwd,
        ))),
        "command" => {
            let command = custom_command.ok_or_else(|| {
                LlmError::CommandFailed("provider 'command' requires a command line".to_owned())
            })?;
            Ok(Box::new(CustomCommand::new(command, cwd)))
        }
        other => Err(LlmError::UnsupportedProvider(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = client_for_provider("openai", None, None, &PathBuf::from(".")).unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedProvider(_)));
    }

    #[test]
    fn test_command_provider_requires_command() {
        let err = client_for_provider("command", None, None, &PathBuf::from(".")).unwrap_err();
        assert!(matches!(err, LlmError::CommandFailed(_)));
    }

    #[test]
    fn test_claude_provider_constructs() {
        assert!(client_for_provider("claude", Some("haiku"), None, &PathBuf::from(".")).is_ok());
    }
}
