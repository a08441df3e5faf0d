//! Single-threaded inverted index: the authoritative data model.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **WORD_ORDER**: the outer map is ordered by word (lexicographic) —
//!    required for `partial_search`'s tail-range scan.
//! 2. **LOCATION_ORDER**: every inner map is ordered by location.
//! 3. **POSITION_ORDER**: every position set is ascending and duplicate-free.
//! 4. **NO_EMPTY**: no empty inner map and no empty position set is ever
//!    stored; `insert` never creates one and `merge` never introduces one.
//! 5. **COUNTS_COVER**: every location that appears anywhere in the index
//!    has an entry in `counts`.

pub mod concurrent;

use crate::types::{compare_results, Location, Position, SearchResult, Word};
use std::collections::{BTreeMap, BTreeSet};

/// The inverted index: `Word -> Location -> ordered set of Position`,
/// plus a parallel `Location -> word count` map.
#[derive(Debug, Default, Clone)]
pub struct Index {
    words: BTreeMap<Word, BTreeMap<Location, BTreeSet<Position>>>,
    counts: BTreeMap<Location, Position>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` at `position` in `location`.
    ///
    /// Updates `counts[location]` to `max(counts[location], position)`.
    /// Cannot fail.
    pub fn insert(&mut self, word: &str, location: &str, position: Position) {
        self.words
            .entry(word.to_string())
            .or_default()
            .entry(location.to_string())
            .or_default()
            .insert(position);

        let count = self.counts.entry(location.to_string()).or_insert(0);
        *count = (*count).max(position);
    }

    /// Merge `other` into `self`.
    ///
    /// **Precondition**: `self` and `other` must not have ingested the same
    /// location — positions still union correctly if they did, but the
    /// resulting word count loses meaning (it becomes the max across both
    /// sub-indexes' token streams rather than either one's true length).
    pub fn merge(&mut self, other: &Index) {
        for (word, locations) in &other.words {
            let entry = self.words.entry(word.clone()).or_default();
            for (location, positions) in locations {
                entry
                    .entry(location.clone())
                    .or_default()
                    .extend(positions.iter().copied());
            }
        }

        for (location, count) in &other.counts {
            let existing = self.counts.entry(location.clone()).or_insert(0);
            *existing = (*existing).max(*count);
        }
    }

    fn accumulate(
        &self,
        word: &str,
        acc: &mut BTreeMap<Location, u32>,
    ) {
        let Some(locations) = self.words.get(word) else {
            return;
        };
        for (location, positions) in locations {
            *acc.entry(location.clone()).or_insert(0) += positions.len() as u32;
        }
    }

    fn results_from(&self, acc: BTreeMap<Location, u32>) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = acc
            .into_iter()
            .map(|(location, match_count)| {
                let word_count = self.get_word_count(&location);
                SearchResult::new(location, match_count, word_count)
            })
            .collect();
        results.sort_by(compare_results);
        results
    }

    /// Each query word must appear verbatim as an index key. Each location
    /// contributes at most one result across the whole query (§4.1).
    pub fn exact_search(&self, queries: &BTreeSet<Word>) -> Vec<SearchResult> {
        let mut acc: BTreeMap<Location, u32> = BTreeMap::new();
        for word in queries {
            self.accumulate(word, &mut acc);
        }
        self.results_from(acc)
    }

    /// For each query word `w`, scan the ordered word map starting at the
    /// first key `>= w` and treat every key that begins with `w` as a
    /// match, stopping at the first key that does not (§4.1). `w` itself is
    /// a prefix of itself, so it is never excluded by the tail scan.
    pub fn partial_search(&self, queries: &BTreeSet<Word>) -> Vec<SearchResult> {
        let mut acc: BTreeMap<Location, u32> = BTreeMap::new();
        for word in queries {
            for (candidate, locations) in self.words.range(word.clone()..) {
                if !candidate.starts_with(word.as_str()) {
                    break;
                }
                for (location, positions) in locations {
                    *acc.entry(location.clone()).or_insert(0) += positions.len() as u32;
                }
            }
        }
        self.results_from(acc)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn contains_location(&self, word: &str, location: &str) -> bool {
        self.words
            .get(word)
            .is_some_and(|locs| locs.contains_key(location))
    }

    pub fn contains_position(&self, word: &str, location: &str, position: Position) -> bool {
        self.words
            .get(word)
            .and_then(|locs| locs.get(location))
            .is_some_and(|positions| positions.contains(&position))
    }

    pub fn num_unique_words(&self) -> usize {
        self.words.len()
    }

    pub fn num_locations(&self, word: &str) -> usize {
        self.words.get(word).map_or(0, BTreeMap::len)
    }

    pub fn num_positions(&self, word: &str, location: &str) -> usize {
        self.words
            .get(word)
            .and_then(|locs| locs.get(location))
            .map_or(0, BTreeSet::len)
    }

    pub fn get_word_count(&self, location: &str) -> Position {
        self.counts.get(location).copied().unwrap_or(0)
    }

    pub fn get_positions(&self, word: &str, location: &str) -> BTreeSet<Position> {
        self.words
            .get(word)
            .and_then(|locs| locs.get(location))
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_locations(&self, word: &str) -> BTreeSet<Location> {
        self.words
            .get(word)
            .map(|locs| locs.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_words(&self) -> &BTreeMap<Word, BTreeMap<Location, BTreeSet<Position>>> {
        &self.words
    }

    pub fn get_word_counts(&self) -> &BTreeMap<Location, Position> {
        &self.counts
    }
}
