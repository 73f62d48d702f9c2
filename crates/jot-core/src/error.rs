//! Error types for parsing and file I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the parser and the file helpers.
///
/// Parse failures carry the byte offset of the first character that could
/// not be consumed; file failures carry the offending path.
#[derive(Error, Debug)]
pub enum Error {
    /// The input violated the active grammar (strict or lenient).
    #[error("syntax error at byte offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// Reading or writing a document file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Byte offset of the first offending character, for syntax errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } => Some(*offset),
            Error::Io { .. } => None,
        }
    }
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, Error>;
