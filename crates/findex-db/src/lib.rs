//! mlocate.db binary format decoder for findex.
//!
//! This crate reads the binary database produced by mlocate's `updatedb`
//! and reconstructs every path it indexes.
//!
//! # Format overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ HEADER (16 bytes + root path)                            │
//! │   magic: [u8; 8] = "\0mlocate"                           │
//! │   config_size: u32 (big endian)                          │
//! │   version: u8                                            │
//! │   require_visibility: u8                                 │
//! │   padding: [u8; 2]                                       │
//! │   root_path: null-terminated string                      │
//! ├──────────────────────────────────────────────────────────┤
//! │ CONFIG BLOCK (config_size bytes, opaque)                 │
//! │   starts at offset 16, i.e. the root path lives inside   │
//! │   this region; the record stream begins at               │
//! │   16 + config_size regardless of the root path's length  │
//! ├──────────────────────────────────────────────────────────┤
//! │ DIRECTORY RECORDS (repeated until EOF)                   │
//! │   time_sec: u64, time_nsec: u32, padding: u32            │
//! │   dir_path: null-terminated string                       │
//! │   entries:                                               │
//! │     type: u8 (0 = file, 1 = directory, 2 = end)          │
//! │     name: null-terminated string (absent for end)        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use findex_db::Database;
//!
//! let db = Database::open("/var/lib/mlocate/mlocate.db").unwrap();
//! println!("{} paths under {}", db.len(), db.root_path());
//! for path in db.paths().iter().take(10) {
//!     println!("{path}");
//! }
//! ```
//!
//! Decoding is all-or-nothing: any structural error aborts the whole
//! decode and no partial path set is returned.

mod decoder;
mod header;
mod summary;

pub use decoder::Database;
pub use header::{ENTRY_DIRECTORY, ENTRY_END, ENTRY_FILE, HEADER_PREFIX_LEN, Header, MAGIC};
pub use summary::DatabaseSummary;

// Re-export core types for convenience
pub use findex_core::{DecodeError, PathSet};
