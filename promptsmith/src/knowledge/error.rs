//! Knowledge document read errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error when reading a knowledge document from disk.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("knowledge document not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read knowledge document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ParseError::Read { .. } => "READ_ERROR",
        }
    }

    pub fn status_hint(&self) -> u16 {
        match self {
            ParseError::FileNotFound { .. } => 404,
            ParseError::Read { .. } => 500,
        }
    }

    /// Classifies an I/O error for `path`: `NotFound` becomes [`ParseError::FileNotFound`].
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ParseError::FileNotFound { path }
        } else {
            ParseError::Read { path, source }
        }
    }
}
