//! Error types.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    /// Parameters rejected before any file is touched.
    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },

    /// The destination (or a file being verified) could not be opened, written or read.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not follow the `[a..] [b..] d` layout.
    #[error("line {line}: malformed test case: {reason}")]
    Parse { line: usize, reason: String },

    /// A well-formed line whose contents break the file's invariants.
    #[error("line {line}: {reason}")]
    Mismatch { line: usize, reason: String },

    /// The file holds a different number of test cases than configured.
    #[error("expected {expected} test cases, found {found}")]
    LineCount { expected: usize, found: usize },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
