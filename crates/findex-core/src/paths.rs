//! Insertion-ordered, deduplicated path collection.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The set of paths reconstructed from a database, in the order they first
/// appear in the record stream.
///
/// The raw byte stream can encode the same directory or file more than
/// once; the first occurrence wins and later ones are ignored, so
/// iteration order is stable across re-encodings of the same tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathSet {
    paths: IndexSet<String>,
}

impl PathSet {
    /// Create an empty path set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path set with room for `capacity` paths.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: IndexSet::with_capacity(capacity),
        }
    }

    /// Insert a path, keeping the first occurrence's position.
    ///
    /// Returns `true` if the path was not already present.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Check whether a path is present.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Get the path at a given insertion position.
    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.paths.get_index(index).map(String::as_str)
    }

    /// Iterate over paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Number of unique paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl FromIterator<String> for PathSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = PathSet::new();
        assert!(set.insert("/etc"));
        assert!(set.insert("/etc/passwd"));
        assert!(!set.insert("/etc"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_first_occurrence_keeps_position() {
        let mut set = PathSet::new();
        set.insert("/b");
        set.insert("/a");
        set.insert("/b");
        set.insert("/c");

        let paths: Vec<&str> = set.iter().collect();
        assert_eq!(paths, vec!["/b", "/a", "/c"]);
        assert_eq!(set.get_index(0), Some("/b"));
    }

    #[test]
    fn test_empty() {
        let set = PathSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains("/"));
    }
}
