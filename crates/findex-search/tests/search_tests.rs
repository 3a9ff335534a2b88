use findex_search::{MatchMode, SearchQuery, search};

fn sample_paths() -> Vec<&'static str> {
    vec!["/home/alice/report.txt", "/home/bob/notes.md", "/etc/passwd"]
}

#[test]
fn test_substring_search_preserves_order() {
    let query = SearchQuery::substring("home");
    let results = search(sample_paths(), &query).unwrap();
    assert_eq!(results, vec!["/home/alice/report.txt", "/home/bob/notes.md"]);
}

#[test]
fn test_glob_search_whole_path() {
    let query = SearchQuery::builder()
        .pattern("*.txt")
        .mode(MatchMode::Glob)
        .build()
        .unwrap();
    let results = search(sample_paths(), &query).unwrap();
    assert_eq!(results, vec!["/home/alice/report.txt"]);
}

#[test]
fn test_regex_search_anchored_prefix() {
    let query = SearchQuery::builder()
        .pattern("^/etc")
        .mode(MatchMode::Regex)
        .build()
        .unwrap();
    let results = search(sample_paths(), &query).unwrap();
    assert_eq!(results, vec!["/etc/passwd"]);
}

#[test]
fn test_limit_returns_earliest_matches() {
    let query = SearchQuery::builder()
        .pattern("home")
        .limit(Some(1))
        .build()
        .unwrap();
    let results = search(sample_paths(), &query).unwrap();
    assert_eq!(results, vec!["/home/alice/report.txt"]);
}

#[test]
fn test_case_insensitive_glob() {
    let query = SearchQuery::builder()
        .pattern("*.TXT")
        .mode(MatchMode::Glob)
        .case_insensitive(true)
        .build()
        .unwrap();
    let results = search(sample_paths(), &query).unwrap();
    assert_eq!(results, vec!["/home/alice/report.txt"]);
}

#[test]
fn test_case_insensitive_regex() {
    let query = SearchQuery::builder()
        .pattern("PASSWD$")
        .mode(MatchMode::Regex)
        .case_insensitive(true)
        .build()
        .unwrap();
    let results = search(sample_paths(), &query).unwrap();
    assert_eq!(results, vec!["/etc/passwd"]);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let query = SearchQuery::substring("zzz");
    let results = search(sample_paths(), &query).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_invalid_pattern_reports_syntax_error() {
    let query = SearchQuery::builder()
        .pattern("(unclosed")
        .mode(MatchMode::Regex)
        .build()
        .unwrap();
    let err = search(sample_paths(), &query).unwrap_err();
    assert!(err.to_string().contains("invalid regex pattern"));
}
