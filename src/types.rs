//! Shared value types used across the index, search, and ingest layers.

use std::cmp::Ordering;

/// A stemmed, lowercased, non-empty token. See [`crate::tokenize`].
pub type Word = String;

/// An opaque string identifying a document: a file path or a URL.
pub type Location = String;

/// A 1-based ordinal of a token's occurrence within its document.
pub type Position = u32;

/// One row of a search result list: a location, how many query words it
/// matched, and a term-frequency score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub location: Location,
    pub match_count: u32,
    pub score: f64,
}

impl SearchResult {
    pub(crate) fn new(location: Location, match_count: u32, word_count: u32) -> Self {
        let score = if word_count == 0 {
            0.0
        } else {
            f64::from(match_count) / f64::from(word_count)
        };
        Self {
            location,
            match_count,
            score,
        }
    }
}

/// Total ordering used everywhere results are sorted: §4.1 of the spec.
///
/// 1. score descending
/// 2. match_count descending
/// 3. location ascending, case-insensitive
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.match_count.cmp(&a.match_count))
        .then_with(|| a.location.to_lowercase().cmp(&b.location.to_lowercase()))
}

/// Sort a result list in place per [`compare_results`].
pub fn sort_results(results: &mut [SearchResult]) {
    results.sort_by(compare_results);
}
