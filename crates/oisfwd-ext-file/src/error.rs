//! File error types.

use std::path::Path;

use thiserror::Error;

use oisfwd_engine::SourceError;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors reading or writing CSV files.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FileError {
    /// The file could not be opened, read or written.
    #[error("{path}: {reason}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        reason: String,
    },

    /// A record is malformed.
    #[error("{path}, record {record}: {reason}")]
    Parse {
        /// File path
        path: String,
        /// 1-based data record number
        record: usize,
        /// What was wrong
        reason: String,
    },
}

impl FileError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: &Path, reason: impl ToString) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: &Path, record: usize, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            record,
            reason: reason.to_string(),
        }
    }
}

impl From<FileError> for SourceError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::Io { .. } => SourceError::io(err.to_string()),
            FileError::Parse { .. } => SourceError::parse(err.to_string()),
        }
    }
}
