use super::*;
use crate::net::types::CountEntry;


#[test]
fn footnote_joins_present_parts() {
    let stats = RepoStats {
        backend: Some("json".to_owned()),
        location: Some("data/problems".to_owned()),
        size_mb: Some(0.5),
        ..RepoStats::default()
    };
    assert_eq!(repository_footnote(&stats).unwrap(), "json · data/problems · 0.50 MB");
}

#[test]
fn footnote_skips_missing_parts() {
    let stats = RepoStats {
        backend: Some("sqlite".to_owned()),
        location: Some(String::new()),
        ..RepoStats::default()
    };
    assert_eq!(repository_footnote(&stats).unwrap(), "sqlite");
}

#[test]
fn footnote_absent_without_repository_info() {
    assert!(repository_footnote(&RepoStats::default()).is_none());
}

#[test]
fn difficulty_table_hidden_without_breakdown() {
    let stats = RepoStats {
        total: 3,
        ..RepoStats::default()
    };
    assert!(difficulty_rows(&stats).is_none());
}

#[test]
fn difficulty_table_lists_each_level() {
    let stats = RepoStats {
        by_difficulty: vec![
            CountEntry { key: "1".to_owned(), count: 2 },
            CountEntry { key: "3".to_owned(), count: 5 },
        ],
        ..RepoStats::default()
    };
    assert_eq!(
        difficulty_rows(&stats).unwrap(),
        vec![("1".to_owned(), 2), ("3".to_owned(), 5)]
    );
}
