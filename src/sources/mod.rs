//! External collaborators that produce diff input.

pub mod local_git;

pub use local_git::{parse_remote_url, LocalGitError, LocalGitSource, RemoteInfo};
