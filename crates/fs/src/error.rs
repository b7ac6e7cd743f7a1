use std::io;

use thiserror::Error;

/// Recoverable listing failures. Each one becomes a single
/// `ls: <path>: <reason>` line; none of them abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The path does not exist, either at resolution time or because it
    /// vanished between directory listing and metadata collection.
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: Permission denied")]
    PermissionDenied { path: String },

    /// Any other OS failure, carrying the OS description without the errno suffix.
    #[error("{path}: {reason}")]
    Io { path: String, reason: String },
}

impl ListError {
    pub fn from_io(path: impl Into<String>, err: &io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => ListError::NotFound { path },
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied { path },
            _ => ListError::Io {
                path,
                reason: os_reason(err),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ListError::NotFound { path }
            | ListError::PermissionDenied { path }
            | ListError::Io { path, .. } => path,
        }
    }
}

/// `io::Error` renders as "Not a directory (os error 20)"; keep only the description.
fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) => text[..idx].to_owned(),
        None => text,
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
