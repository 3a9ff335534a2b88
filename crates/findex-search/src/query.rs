//! Search query types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// How a pattern is interpreted when matching paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain text search: the pattern matches anywhere in the path.
    #[default]
    Substring,
    /// Shell-style glob matched against the whole path (e.g. "*.txt").
    Glob,
    /// Regular expression, unanchored search.
    Regex,
}

impl MatchMode {
    /// Get a short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Glob => "glob",
            Self::Regex => "regex",
        }
    }
}

/// A search over decoded paths.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SearchQuery {
    /// Pattern to match, interpreted per `mode`.
    pub pattern: String,

    /// How the pattern is interpreted.
    #[builder(default)]
    pub mode: MatchMode,

    /// Fold case on both pattern and paths before matching.
    #[builder(default = "false")]
    pub case_insensitive: bool,

    /// Stop scanning once this many matches have been found.
    #[builder(default)]
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Create a new query builder.
    pub fn builder() -> SearchQueryBuilder {
        SearchQueryBuilder::default()
    }

    /// Create a case-sensitive substring query with no limit.
    pub fn substring(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            mode: MatchMode::Substring,
            case_insensitive: false,
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder_defaults() {
        let query = SearchQuery::builder().pattern("passwd").build().unwrap();
        assert_eq!(query.pattern, "passwd");
        assert_eq!(query.mode, MatchMode::Substring);
        assert!(!query.case_insensitive);
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_query_builder_requires_pattern() {
        assert!(SearchQuery::builder().build().is_err());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(MatchMode::Substring.label(), "substring");
        assert_eq!(MatchMode::Glob.label(), "glob");
        assert_eq!(MatchMode::Regex.label(), "regex");
    }
}
