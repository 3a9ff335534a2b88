//! Error types for database decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while decoding an mlocate database.
///
/// All variants are fatal for the current file: the decoder never returns
/// a partial path set, and the format has no sync markers to resynchronize
/// on after a bad record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file does not start with the mlocate magic signature.
    #[error("not an mlocate database (bad magic: {found:02x?})")]
    InvalidFormat { found: Vec<u8> },

    /// A null-terminated string ran past the end of the buffer.
    #[error("corrupt record: unterminated string at byte offset {offset}")]
    CorruptRecord { offset: usize },

    /// The buffer ended in the middle of a fixed-size field or jump.
    #[error("unexpected end of file at byte offset {offset} (needed {needed} more bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    /// Reading the database file failed before decoding started.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
