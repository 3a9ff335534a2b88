//! Database summary for stats reporting.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::decoder::Database;

/// Summary statistics for a decoded database, as shown by `findex stats`.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSummary {
    /// Path to the database file.
    pub path: PathBuf,
    /// Size of the database file in bytes.
    pub size_bytes: u64,
    /// Format version byte from the header.
    pub version: u8,
    /// Root path the database was built from.
    pub root_path: String,
    /// Number of unique paths indexed.
    pub total_paths: usize,
}

impl DatabaseSummary {
    /// Summarize a decoded database together with its on-disk size.
    pub fn new(db: &Database, path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            version: db.version(),
            root_path: db.root_path().to_string(),
            total_paths: db.len(),
        }
    }

    /// File name of the database, for display.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("mlocate.db")
    }

    /// Summarize a database file on disk: decode it and record its size.
    pub fn for_file(path: impl AsRef<Path>) -> Result<Self, findex_core::DecodeError> {
        let path = path.as_ref();
        let db = Database::open(path)?;
        let size_bytes = std::fs::metadata(path)
            .map_err(|e| findex_core::DecodeError::io(path, e))?
            .len();
        Ok(Self::new(&db, path, size_bytes))
    }
}
