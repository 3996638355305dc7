//! Error taxonomy for namespace operations.

use thiserror::Error;

/// Coarse classification of an [`FsError`], for callers that only care
/// about which failure happened and not about the path text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    NotADirectory,
    NotAFile,
    AlreadyExists,
    InvalidName,
    InvalidMove,
}

/// Failure of a namespace operation.
///
/// Every operation either succeeds or returns exactly one of these, and a
/// failed operation leaves the tree as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: Not a directory")]
    NotADirectory { path: String },

    #[error("{path}: Not a file")]
    NotAFile { path: String },

    /// Reserved for strict-create variants; overwrite-on-create never raises it.
    #[error("{path}: File exists")]
    AlreadyExists { path: String },

    #[error("{name}: Invalid name")]
    InvalidName { name: String },

    #[error("{source_name} -> {dest}: {reason}")]
    InvalidMove {
        source_name: String,
        dest: String,
        reason: &'static str,
    },
}

impl FsError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<String>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn invalid_move(
        source_name: impl Into<String>,
        dest: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidMove {
            source_name: source_name.into(),
            dest: dest.into(),
            reason,
        }
    }

    /// The kind of failure, without the path payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsError::NotFound { .. } => ErrorKind::NotFound,
            FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
            FsError::NotAFile { .. } => ErrorKind::NotAFile,
            FsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            FsError::InvalidName { .. } => ErrorKind::InvalidName,
            FsError::InvalidMove { .. } => ErrorKind::InvalidMove,
        }
    }
}

/// Result alias used throughout the namespace.
pub type FsResult<T> = Result<T, FsError>;
