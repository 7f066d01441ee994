//! Tests for history/matcher

use super::*;
use crate::test_utils::test_helpers::{paris, paris_tx, place};
use chrono::Utc;

fn entries() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry::new(place("Berlin", None, "Germany"), Utc::now()),
        HistoryEntry::new(paris(), Utc::now()),
        HistoryEntry::new(paris_tx(), Utc::now()),
    ]
}

#[test]
fn test_blank_query_returns_all_in_order() {
    let matcher = HistoryMatcher::new();
    assert_eq!(matcher.filter("", &entries()), vec![0, 1, 2]);
    assert_eq!(matcher.filter("   ", &entries()), vec![0, 1, 2]);
}

#[test]
fn test_fuzzy_match_on_label() {
    let matcher = HistoryMatcher::new();
    let result = matcher.filter("brln", &entries());
    assert_eq!(result, vec![0]);
}

#[test]
fn test_case_insensitive() {
    let matcher = HistoryMatcher::new();
    let result = matcher.filter("PARIS", &entries());
    assert!(result.contains(&1));
    assert!(result.contains(&2));
}

#[test]
fn test_all_terms_must_match() {
    let matcher = HistoryMatcher::new();
    let result = matcher.filter("paris texas", &entries());
    assert_eq!(result, vec![2]);
}

#[test]
fn test_no_match_returns_empty() {
    let matcher = HistoryMatcher::new();
    assert!(matcher.filter("zzzz", &entries()).is_empty());
}

#[test]
fn test_country_matches() {
    let matcher = HistoryMatcher::new();
    let result = matcher.filter("germany", &entries());
    assert_eq!(result, vec![0]);
}
