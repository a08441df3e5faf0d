//! §8 scenario 3: counts and per-word position sets for a simple document.

use crate::common::index_from_corpus;
use std::collections::BTreeSet;

#[test]
fn three_word_document_produces_expected_counts_and_positions() {
    let index = index_from_corpus(&[("c.txt", "one two three")]);

    assert_eq!(index.get_word_count("c.txt"), 3);
    assert_eq!(index.get_positions("one", "c.txt"), BTreeSet::from([1]));
    assert_eq!(index.get_positions("two", "c.txt"), BTreeSet::from([2]));
    assert_eq!(index.get_positions("three", "c.txt"), BTreeSet::from([3]));
}
