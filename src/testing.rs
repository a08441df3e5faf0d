//! Test fixtures shared across unit and integration tests.
//!
//! Always compiled (not `#[cfg(test)]`-gated) but hidden from documentation,
//! matching the teacher's pattern of a canonical, reusable helper module
//! rather than duplicating fixture-building code in every test file.

#![doc(hidden)]

use crate::index::concurrent::ConcurrentIndex;
use crate::index::Index;

/// Build a shared index from `(location, text)` pairs, tokenizing each
/// text and inserting it under its location in one merge per document —
/// the same "local index, then merge once" shape ingestion tasks use.
pub fn index_from_corpus(corpus: &[(&str, &str)]) -> ConcurrentIndex {
    let shared = ConcurrentIndex::new();
    for (location, text) in corpus {
        let mut local = Index::new();
        for (i, token) in crate::tokenize::parse(text).into_iter().enumerate() {
            local.insert(&token, location, i as u32 + 1);
        }
        shared.merge(&local);
    }
    shared
}

/// The corpus used by §8's scenario 1/2 examples: three short documents
/// whose term frequencies produce an unambiguous ranking.
pub fn sample_corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        ("a.txt", "the quick brown fox jumps over the lazy dog"),
        ("b.txt", "quick quick fox"),
        ("c.txt", "the lazy dog sleeps"),
    ]
}
