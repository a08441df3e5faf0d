//! P3/P4: result lists are sorted per §4.1, contain no duplicate
//! locations, and every score is `matchCount / wordCount` with
//! `wordCount >= matchCount >= 1`.

use lexirank::index::Index;
use lexirank::types::compare_results;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

const VOCAB: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon"];
const LOCATIONS: &[&str] = &["doc1.txt", "doc2.txt", "doc3.txt", "doc4.txt"];

fn document_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..VOCAB.len(), 1..30)
}

proptest! {
    #[test]
    fn exact_search_results_are_sorted_deduped_and_score_consistent(
        docs in prop::collection::vec(document_strategy(), 1..LOCATIONS.len() + 1),
        query_idx in 0usize..VOCAB.len(),
    ) {
        let mut index = Index::new();
        for (doc_idx, tokens) in docs.iter().enumerate() {
            let location = LOCATIONS[doc_idx];
            for (position, word_idx) in tokens.iter().enumerate() {
                index.insert(VOCAB[*word_idx], location, position as u32 + 1);
            }
        }

        let query = BTreeSet::from([VOCAB[query_idx].to_string()]);
        let results = index.exact_search(&query);

        // sorted
        for window in results.windows(2) {
            prop_assert!(compare_results(&window[0], &window[1]) != std::cmp::Ordering::Greater);
        }

        // no duplicate locations
        let mut seen = HashSet::new();
        for r in &results {
            prop_assert!(seen.insert(r.location.clone()));
        }

        // score consistency
        for r in &results {
            let word_count = index.get_word_count(&r.location);
            prop_assert!(r.match_count >= 1);
            prop_assert!(word_count >= r.match_count);
            let expected = f64::from(r.match_count) / f64::from(word_count);
            prop_assert!((r.score - expected).abs() < 1e-9);
        }
    }
}
