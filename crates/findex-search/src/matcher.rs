//! Pattern compilation and path scanning.

use globset::{GlobBuilder, GlobMatcher};
use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::query::{MatchMode, SearchQuery};

/// Errors from compiling a search pattern.
///
/// Raised before any path is scanned; matching itself never fails.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The glob pattern failed to compile.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(#[from] globset::Error),

    /// The regular expression failed to compile.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// A search pattern compiled once for scanning many paths.
pub struct Matcher {
    compiled: Compiled,
}

enum Compiled {
    Substring { needle: String, fold_case: bool },
    Glob(GlobMatcher),
    Regex(Regex),
}

impl Matcher {
    /// Compile the query's pattern according to its mode.
    pub fn compile(query: &SearchQuery) -> Result<Self, PatternError> {
        let compiled = match query.mode {
            MatchMode::Substring => Compiled::Substring {
                needle: if query.case_insensitive {
                    query.pattern.to_lowercase()
                } else {
                    query.pattern.clone()
                },
                fold_case: query.case_insensitive,
            },
            MatchMode::Glob => {
                // fnmatch semantics: the glob covers the whole path and
                // `*` crosses path separators.
                let glob = GlobBuilder::new(&query.pattern)
                    .literal_separator(false)
                    .case_insensitive(query.case_insensitive)
                    .build()?;
                Compiled::Glob(glob.compile_matcher())
            }
            MatchMode::Regex => {
                let regex = RegexBuilder::new(&query.pattern)
                    .case_insensitive(query.case_insensitive)
                    .build()?;
                Compiled::Regex(regex)
            }
        };
        Ok(Self { compiled })
    }

    /// Check whether a single path matches.
    pub fn is_match(&self, path: &str) -> bool {
        match &self.compiled {
            Compiled::Substring { needle, fold_case } => {
                if *fold_case {
                    path.to_lowercase().contains(needle.as_str())
                } else {
                    path.contains(needle.as_str())
                }
            }
            Compiled::Glob(matcher) => matcher.is_match(path),
            Compiled::Regex(regex) => regex.is_match(path),
        }
    }
}

/// Scan paths in order and collect those matching the query.
///
/// The pattern is compiled before the first path is examined, so an
/// invalid pattern fails fast with no partial results. When a limit is
/// set, scanning stops at the cap; the earliest matches in iteration
/// order win.
pub fn search<'a, I>(paths: I, query: &SearchQuery) -> Result<Vec<String>, PatternError>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = Matcher::compile(query)?;

    let mut results = Vec::new();
    if query.limit == Some(0) {
        return Ok(results);
    }
    for path in paths {
        if matcher.is_match(path) {
            results.push(path.to_string());
            if query.limit.is_some_and(|limit| results.len() >= limit) {
                break;
            }
        }
    }

    tracing::debug!(
        target: "findex_search",
        pattern = %query.pattern,
        mode = query.mode.label(),
        matches = results.len(),
        "search finished"
    );

    Ok(results)
}
