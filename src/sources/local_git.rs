use serde::Serialize;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Information about the git remote (org/repo and browse URL)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteInfo {
    /// Display name, e.g. "org/repo"
    pub name: String,
    /// URL to open in a browser, e.g. "https://github.com/org/repo"
    pub browse_url: String,
}

#[derive(Error, Debug)]
pub enum LocalGitError {
    #[error("Git error: {0}")]
    Git(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a git repository")]
    NotARepo,
    #[error("File '{path}' not found at ref '{git_ref}'")]
    FileNotFound { path: String, git_ref: String },
}

/// Local git repository used to fetch diffs and file content.
#[derive(Debug)]
pub struct LocalGitSource {
    repo_path: PathBuf,
}

impl LocalGitSource {
    pub fn new(repo_path: PathBuf) -> Result<Self, LocalGitError> {
        if !repo_path.join(".git").exists() {
            return Err(LocalGitError::NotARepo);
        }
        Ok(Self { repo_path })
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<String, LocalGitError> {
        let output = self.run_git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim().to_owned())
    }

    /// Get remote info (org/repo name and browse URL) from the origin remote
    pub fn remote_info(&self) -> Result<RemoteInfo, LocalGitError> {
        let url = self.run_git(&["remote", "get-url", "origin"])?;
        parse_remote_url(url.trim())
    }

    /// Raw diff between the target branch and the current branch (or HEAD
    /// when no branch is given).
    pub fn diff_between(
        &self,
        target_branch: &str,
        current_branch: Option<&str>,
    ) -> Result<String, LocalGitError> {
        let current = match current_branch {
            Some(branch) => branch.to_owned(),
            None => self.current_branch()?,
        };

        log::debug!("diffing {target_branch}..{current}");
        self.run_git(&["diff", target_branch, &current])
    }

    /// Paths of files that changed between the target and current branch.
    pub fn changed_files(
        &self,
        target_branch: &str,
        current_branch: Option<&str>,
    ) -> Result<Vec<String>, LocalGitError> {
        let current = match current_branch {
            Some(branch) => branch.to_owned(),
            None => self.current_branch()?,
        };

        let output = self.run_git(&["diff", "--name-only", target_branch, &current])?;
        Ok(output.lines().map(str::to_owned).collect())
    }

    /// File content at a specific ref (HEAD when none is given).
    pub fn file_content(
        &self,
        file_path: &str,
        git_ref: Option<&str>,
    ) -> Result<String, LocalGitError> {
        let git_ref = git_ref.unwrap_or("HEAD");
        let ref_spec = format!("{git_ref}:{file_path}");

        self.run_git(&["show", &ref_spec])
            .map_err(|_| LocalGitError::FileNotFound {
                path: file_path.to_owned(),
                git_ref: git_ref.to_owned(),
            })
    }

    fn run_git(&self, args: &[&str]) -> Result<String, LocalGitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(LocalGitError::Git(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ))
        }
    }
}

/// Parse a git remote URL into a `RemoteInfo` with org/repo name and browse URL.
///
/// Supported formats:
/// - `https://github.com/org/repo.git`
/// - `https://github.com/org/repo`
/// - `git@github.com:org/repo.git`
/// - `ssh://git@github.com/org/repo.git`
pub fn parse_remote_url(url: &str) -> Result<RemoteInfo, LocalGitError> {
    // SSH shorthand: git@host:org/repo.git
    if let Some(rest) = url.strip_prefix("git@") {
        if let Some((host, path)) = rest.split_once(':') {
            let path = path.strip_suffix(".git").unwrap_or(path);
            return Ok(RemoteInfo {
                name: path.to_owned(),
                browse_url: format!("https://{host}/{path}"),
            });
        }
    }

    // HTTPS or SSH URL: https://host/org/repo.git or ssh://git@host/org/repo.git
    if url.starts_with("https://") || url.starts_with("http://") || url.starts_with("ssh://") {
        let without_scheme = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .or_else(|| url.strip_prefix("ssh://"))
            .unwrap_or(url);

        // Strip optional user@ prefix (e.g. git@)
        let without_user = match without_scheme.split_once('@') {
            Some((_user, rest)) => rest,
            None => without_scheme,
        };

        if let Some((host, path)) = without_user.split_once('/') {
            let path = path.strip_suffix(".git").unwrap_or(path);
            // Ensure we have at least org/repo (two path segments)
            if path.contains('/') {
                return Ok(RemoteInfo {
                    name: path.to_owned(),
                    browse_url: format!("https://{host}/{path}"),
                });
            }
        }
    }

    Err(LocalGitError::Git(format!(
        "Could not parse remote URL: {url}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote_url_ssh_shorthand() {
        let info = parse_remote_url("git@github.com:org/repo.git").unwrap();
        assert_eq!(info.name, "org/repo");
        assert_eq!(info.browse_url, "https://github.com/org/repo");
    }

    #[test]
    fn test_parse_remote_url_https() {
        let info = parse_remote_url("https://github.com/org/repo.git").unwrap();
        assert_eq!(info.name, "org/repo");

        let info = parse_remote_url("https://github.com/org/repo").unwrap();
        assert_eq!(info.browse_url, "https://github.com/org/repo");
    }

    #[test]
    fn test_parse_remote_url_ssh_scheme() {
        let info = parse_remote_url("ssh://git@github.com/org/repo.git").unwrap();
        assert_eq!(info.name, "org/repo");
        assert_eq!(info.browse_url, "https://github.com/org/repo");
    }

    #[test]
    fn test_parse_remote_url_rejects_garbage() {
        assert!(parse_remote_url("not a url").is_err());
        assert!(parse_remote_url("https://github.com/no-repo").is_err());
    }

    #[test]
    fn test_new_rejects_non_repo() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            LocalGitSource::new(dir.path().to_path_buf()),
            Err(LocalGitError::NotARepo)
        ));
    }
}
