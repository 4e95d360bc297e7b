use serde::Serialize;
use thiserror::Error;

/// Unified error type for the review pipeline.
///
/// Structured so callers (and the JSON-speaking CLI) can tell apart git
/// failures, backend failures, and configuration errors.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Git error: {message}")]
    Git { message: String },

    #[error("Review generation error: {message}")]
    Llm { message: String },

    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl AppError {
    /// Check if this error is recoverable (user can retry or take action)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Git, backend, storage, and IO issues may be transient
            Self::Git { .. } | Self::Llm { .. } | Self::Storage { .. } | Self::Io { .. } => true,
            // Wrong format tag is a configuration error; retrying the
            // same call cannot succeed
            Self::UnsupportedFormat { .. } => false,
        }
    }
}

impl From<crate::sources::LocalGitError> for AppError {
    fn from(err: crate::sources::LocalGitError) -> Self {
        use crate::sources::LocalGitError;
        match err {
            LocalGitError::Io(e) => AppError::Io {
                message: e.to_string(),
            },
            other => AppError::Git {
                message: other.to_string(),
            },
        }
    }
}

impl From<crate::llm::LlmError> for AppError {
    fn from(err: crate::llm::LlmError) -> Self {
        match err {
            crate::llm::LlmError::Io(e) => AppError::Io {
                message: e.to_string(),
            },
            other => AppError::Llm {
                message: other.to_string(),
            },
        }
    }
}

impl From<crate::feedback::RenderError> for AppError {
    fn from(err: crate::feedback::RenderError) -> Self {
        match err {
            crate::feedback::RenderError::UnsupportedFormat(format) => {
                AppError::UnsupportedFormat { format }
            }
            crate::feedback::RenderError::Json(e) => AppError::Storage {
                message: e.to_string(),
            },
        }
    }
}

impl From<crate::history::StorageError> for AppError {
    fn from(err: crate::history::StorageError) -> Self {
        AppError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io {
            message: err.to_string(),
        }
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::UnsupportedFormat {
            format: "yaml".to_owned(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"UnsupportedFormat\""));
        assert!(json.contains("\"format\":\"yaml\""));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(AppError::Git {
            message: "fetch failed".to_owned()
        }
        .is_recoverable());
        assert!(!AppError::UnsupportedFormat {
            format: "yaml".to_owned()
        }
        .is_recoverable());
    }

    #[test]
    fn test_render_error_maps_to_unsupported_format() {
        let render_err = crate::feedback::RenderError::UnsupportedFormat("bogus".to_owned());
        let app_err: AppError = render_err.into();
        assert!(matches!(app_err, AppError::UnsupportedFormat { .. }));
    }
}
