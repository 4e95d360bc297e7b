//! Subprocess-backed review generation clients.

use super::{LlmError, ReviewGenerator};
use crate::diff::FileContext;
use crate::llm::prompt::build_review_prompt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Locate the `claude` executable in PATH.
fn find_claude_executable() -> Option<String> {
    let candidates = if cfg!(target_os = "windows") {
        vec!["claude.exe", "claude.cmd", "claude.bat"]
    } else {
        vec!["claude"]
    };

    let which_cmd = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };

    for candidate in candidates {
        if let Ok(output) = Command::new(which_cmd).arg(candidate).output() {
            if output.status.success() {
                let path = String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_owned();
                if !path.is_empty() {
                    return Some(path);
                }
            }
        }
    }

    None
}

/// Check if the claude CLI is available.
pub fn check_claude_available() -> bool {
    find_claude_executable().is_some()
}

fn capture_stdout(output: std::process::Output) -> Result<String, LlmError> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LlmError::CommandFailed(stderr.to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if stdout.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(stdout)
}

/// Review generator backed by the `claude` CLI.
#[derive(Debug)]
pub struct ClaudeCli {
    model: String,
    cwd: PathBuf,
}

impl ClaudeCli {
    pub fn new(model: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            cwd: cwd.into(),
        }
    }
}

impl ReviewGenerator for ClaudeCli {
    fn generate_review(&self, contexts: &[FileContext]) -> Result<String, LlmError> {
        let prompt = build_review_prompt(contexts);
        let claude_path = find_claude_executable().ok_or(LlmError::CliNotFound)?;

        log::debug!(
            "running claude (model {}) for {} file context(s)",
            self.model,
            contexts.len()
        );

        let output = Command::new(&claude_path)
            .args(["--print", "--model", &self.model, "-p", &prompt])
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| LlmError::CommandFailed(e.to_string()))?;

        capture_stdout(output)
    }
}

/// Review generator that runs a user-supplied command line.
///
/// The prompt is appended as the final argument; the command itself is not
/// passed through a shell. Only use commands from trusted configuration.
#[derive(Debug)]
pub struct CustomCommand {
    command: String,
    cwd: PathBuf,
}

impl CustomCommand {
    pub fn new(command: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            cwd: cwd.into(),
        }
    }

    fn run(&self, prompt: &str, cwd: &Path) -> Result<String, LlmError> {
        let parts: Vec<&str> = self.command.split_whitespace().collect();
        let Some((&program, args)) = parts.split_first() else {
            return Err(LlmError::CommandFailed("Custom command is empty".to_owned()));
        };

        let mut args: Vec<&str> = args.to_vec();
        args.push(prompt);

        let output = Command::new(program)
            .args(&args)
            .current_dir(cwd)
            .output()
            .map_err(|e| LlmError::CommandFailed(e.to_string()))?;

        capture_stdout(output)
    }
}

impl ReviewGenerator for CustomCommand {
    fn generate_review(&self, contexts: &[FileContext]) -> Result<String, LlmError> {
        let prompt = build_review_prompt(contexts);
        self.run(&prompt, &self.cwd)
    }
}
