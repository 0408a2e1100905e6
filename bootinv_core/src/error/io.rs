//! I/O error types with filesystem context

use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O error, with the path it occurred on when known
#[derive(Error, Debug)]
#[error("{}", describe(self))]
pub struct IoError {
    /// The kind of I/O failure
    pub kind: IoErrorKind,
    /// Path the failure relates to, if any
    pub path: Option<PathBuf>,
    /// Underlying I/O error, if any
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    /// The path does not exist
    NotFound,
    /// The path exists but cannot be read
    PermissionDenied,
    /// Any other I/O failure
    Other,
}

impl IoError {
    /// A path that does not exist
    pub fn not_found(path: &Path) -> Self {
        Self {
            kind: IoErrorKind::NotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// A path that exists but could not be read
    pub fn permission_denied(path: &Path, source: std::io::Error) -> Self {
        Self {
            kind: IoErrorKind::PermissionDenied,
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    /// Classify a standard I/O error, without path context
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Attach path context to an existing error
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn describe(error: &IoError) -> String {
    match (&error.kind, &error.path) {
        (IoErrorKind::NotFound, Some(path)) => format!("path not found: {}", path.display()),
        (IoErrorKind::NotFound, None) => "path not found".to_string(),
        (IoErrorKind::PermissionDenied, Some(path)) => {
            format!("permission denied: {}", path.display())
        }
        (IoErrorKind::PermissionDenied, None) => "permission denied".to_string(),
        (IoErrorKind::Other, _) => match &error.source {
            Some(source) => format!("I/O error: {source}"),
            None => "I/O error".to_string(),
        },
    }
}
