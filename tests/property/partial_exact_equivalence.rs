//! P2: `partialSearch({w})` equals `exactSearch(S)` where `S` is every
//! indexed word that has `w` as a prefix.

use lexirank::index::Index;
use proptest::prelude::*;
use std::collections::BTreeSet;

const VOCAB: &[&str] = &["fox", "foxes", "foxglove", "cat", "category", "dog"];

fn corpus_strategy() -> impl Strategy<Value = Vec<(usize, &'static str, u32)>> {
    prop::collection::vec(
        (0usize..VOCAB.len(), prop::sample::select(vec!["a.txt", "b.txt"]), 1u32..50),
        1..80,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(word_idx, location, position)| (word_idx, location, position))
            .collect()
    })
}

proptest! {
    #[test]
    fn partial_search_matches_exact_search_over_the_prefix_closure(
        rows in corpus_strategy(), prefix_idx in 0usize..VOCAB.len()
    ) {
        let mut index = Index::new();
        let locations = ["a.txt", "b.txt"];
        for (word_idx, location, position) in &rows {
            index.insert(VOCAB[*word_idx], location, *position);
        }
        let _ = locations;

        let prefix = VOCAB[prefix_idx];
        let matching_words: BTreeSet<String> = VOCAB
            .iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| w.to_string())
            .collect();

        let mut partial = index.partial_search(&BTreeSet::from([prefix.to_string()]));
        let mut exact = index.exact_search(&matching_words);
        partial.sort_by(|a, b| a.location.cmp(&b.location));
        exact.sort_by(|a, b| a.location.cmp(&b.location));

        prop_assert_eq!(partial.len(), exact.len());
        for (p, e) in partial.iter().zip(exact.iter()) {
            prop_assert_eq!(&p.location, &e.location);
            prop_assert_eq!(p.match_count, e.match_count);
        }
    }
}
