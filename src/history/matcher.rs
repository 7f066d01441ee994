use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::storage::HistoryEntry;

/// Fuzzy filter over history labels
pub struct HistoryMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for HistoryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryMatcher").finish_non_exhaustive()
    }
}

impl Default for HistoryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Indices of entries matching every whitespace-separated term
    ///
    /// Best score first; ties keep recency order. A blank query matches
    /// everything in recency order.
    pub fn filter(&self, query: &str, entries: &[HistoryEntry]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..entries.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let label = entry.label();
                terms
                    .iter()
                    .map(|term| self.matcher.fuzzy_match(&label, term))
                    .sum::<Option<i64>>()
                    .map(|score| (idx, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
