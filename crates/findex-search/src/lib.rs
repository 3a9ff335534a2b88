//! Pattern matching over findex path sets.
//!
//! Given the paths decoded from a database, this crate filters them by
//! substring, glob, or regular expression, preserving the decoder's
//! insertion order and optionally capping the result count.
//!
//! # Example
//!
//! ```rust
//! use findex_search::{MatchMode, SearchQuery, search};
//!
//! let paths = ["/home/alice/report.txt", "/etc/passwd"];
//! let query = SearchQuery::builder()
//!     .pattern("*.txt")
//!     .mode(MatchMode::Glob)
//!     .build()
//!     .unwrap();
//!
//! let results = search(paths, &query).unwrap();
//! assert_eq!(results, vec!["/home/alice/report.txt"]);
//! ```

mod matcher;
mod query;

pub use matcher::{Matcher, PatternError, search};
pub use query::{MatchMode, SearchQuery, SearchQueryBuilder};
