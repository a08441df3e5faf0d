//! P5: merging indexes built from disjoint location sets is equivalent
//! to ingesting both corpora into one fresh index, regardless of order.

use lexirank::index::Index;
use proptest::prelude::*;

fn doc_strategy() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::vec(("[a-z]{2,5}", 1u32..20), 1..15)
}

proptest! {
    #[test]
    fn merging_disjoint_sub_indexes_matches_a_fresh_combined_ingest(
        doc_a in doc_strategy(),
        doc_b in doc_strategy(),
    ) {
        let mut a = Index::new();
        for (i, (word, _)) in doc_a.iter().enumerate() {
            a.insert(word, "a.txt", i as u32 + 1);
        }
        let mut b = Index::new();
        for (i, (word, _)) in doc_b.iter().enumerate() {
            b.insert(word, "b.txt", i as u32 + 1);
        }

        let mut merged = a.clone();
        merged.merge(&b);

        let mut fresh = Index::new();
        for (i, (word, _)) in doc_a.iter().enumerate() {
            fresh.insert(word, "a.txt", i as u32 + 1);
        }
        for (i, (word, _)) in doc_b.iter().enumerate() {
            fresh.insert(word, "b.txt", i as u32 + 1);
        }

        prop_assert_eq!(merged.get_words(), fresh.get_words());
        prop_assert_eq!(merged.get_word_counts(), fresh.get_word_counts());
    }
}
