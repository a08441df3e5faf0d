//! Multi-reader/single-writer wrapper around [`Index`] (§4.2).
//!
//! `parking_lot::RwLock` gives us readers that run concurrently and
//! writers that exclude both readers and other writers, without requiring
//! a bespoke fair-scheduling primitive — the spec only requires
//! starvation-freedom under finite contention, which `parking_lot`
//! provides. All view-returning accessors copy their result before
//! releasing the lock, so callers never hold a reference into the guard.

use super::Index;
use crate::types::{Location, Position, SearchResult, Word};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};

/// Thread-safe handle to an [`Index`]. Cheap to clone (an `Arc` underneath
/// via `parking_lot::RwLock` would also work, but callers typically wrap
/// this in their own `Arc` since the pool and crawler both need to share
/// one instance across worker threads).
#[derive(Default)]
pub struct ConcurrentIndex {
    inner: RwLock<Index>,
}

impl ConcurrentIndex {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Index::new()),
        }
    }

    /// Write-side: merge a privately-built sub-index into the shared one.
    /// This is the only mutation path callers should use in practice — a
    /// per-task local [`Index`] is built lock-free and merged once, keeping
    /// the write critical section proportional to the task's own output
    /// rather than to the whole corpus.
    pub fn merge(&self, other: &Index) {
        self.inner.write().merge(other);
    }

    pub fn insert(&self, word: &str, location: &str, position: Position) {
        self.inner.write().insert(word, location, position);
    }

    pub fn exact_search(&self, queries: &BTreeSet<Word>) -> Vec<SearchResult> {
        self.inner.read().exact_search(queries)
    }

    pub fn partial_search(&self, queries: &BTreeSet<Word>) -> Vec<SearchResult> {
        self.inner.read().partial_search(queries)
    }

    pub fn search(&self, queries: &BTreeSet<Word>, partial: bool) -> Vec<SearchResult> {
        if partial {
            self.partial_search(queries)
        } else {
            self.exact_search(queries)
        }
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.inner.read().contains_word(word)
    }

    pub fn contains_location(&self, word: &str, location: &str) -> bool {
        self.inner.read().contains_location(word, location)
    }

    pub fn contains_position(&self, word: &str, location: &str, position: Position) -> bool {
        self.inner.read().contains_position(word, location, position)
    }

    pub fn num_unique_words(&self) -> usize {
        self.inner.read().num_unique_words()
    }

    pub fn num_locations(&self, word: &str) -> usize {
        self.inner.read().num_locations(word)
    }

    pub fn num_positions(&self, word: &str, location: &str) -> usize {
        self.inner.read().num_positions(word, location)
    }

    pub fn get_word_count(&self, location: &str) -> Position {
        self.inner.read().get_word_count(location)
    }

    pub fn get_positions(&self, word: &str, location: &str) -> BTreeSet<Position> {
        self.inner.read().get_positions(word, location)
    }

    pub fn get_locations(&self, word: &str) -> BTreeSet<Location> {
        self.inner.read().get_locations(word)
    }

    /// Snapshot of the full word map. Defensively copied: the lock is
    /// released before this returns.
    pub fn get_words(&self) -> BTreeMap<Word, BTreeMap<Location, BTreeSet<Position>>> {
        self.inner.read().get_words().clone()
    }

    /// Snapshot of the counts map.
    pub fn get_word_counts(&self) -> BTreeMap<Location, Position> {
        self.inner.read().get_word_counts().clone()
    }
}
