//! NO_EMPTY and COUNTS_COVER invariants (index/mod.rs doc comment) across
//! merges of overlapping and disjoint sub-indexes.

use crate::common::index_from_corpus;
use lexirank::index::Index;

#[test]
fn merging_the_same_location_twice_unions_positions_without_duplicates() {
    let mut a = Index::new();
    a.insert("quick", "a.txt", 1);
    a.insert("quick", "a.txt", 5);

    let mut b = Index::new();
    b.insert("quick", "a.txt", 5);
    b.insert("quick", "a.txt", 9);

    a.merge(&b);
    assert_eq!(a.get_positions("quick", "a.txt").len(), 3);
}

#[test]
fn every_indexed_location_has_a_counts_entry() {
    let index = index_from_corpus(&[("a.txt", "one two three"), ("b.txt", "four five")]);
    assert_eq!(index.get_word_count("a.txt"), 3);
    assert_eq!(index.get_word_count("b.txt"), 2);
}

#[test]
fn an_absent_word_or_location_reports_zero_not_an_error() {
    let index = index_from_corpus(&[("a.txt", "hello world")]);
    assert!(!index.contains_word("nonexistent"));
    assert_eq!(index.num_positions("nonexistent", "a.txt"), 0);
    assert_eq!(index.get_word_count("nonexistent.txt"), 0);
}
