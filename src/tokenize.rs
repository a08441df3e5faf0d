//! Tokeniser: split raw text into lowercased, stemmed word tokens (C1).
//!
//! Normalization (NFD decompose, strip combining marks, lowercase) reuses
//! `sorex`'s `utils::normalize`; stemming uses a Snowball-English stemmer
//! from `rust-stemmers`, matching the "Snowball-style stemmer" contract in
//! the glossary.

use crate::utils::normalize;
use rust_stemmers::{Algorithm, Stemmer};
use std::sync::OnceLock;

fn stemmer() -> &'static Stemmer {
    static STEMMER: OnceLock<Stemmer> = OnceLock::new();
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Split `text` on runs of non-letters (after normalization), stem each
/// run, and return the non-empty stemmed tokens in reading order.
///
/// This is the parser the file-ingestion path (§4.4) uses: every token it
/// yields is, by construction, non-empty, so every parsed token consumes a
/// position when inserted.
pub fn parse(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let stemmer = stemmer();
    normalized
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| stemmer.stem(word).into_owned())
        .filter(|stem| !stem.is_empty())
        .collect()
}

/// Stem a whitespace-separated line into its unique, lexicographically
/// sorted stems — the canonical query key (glossary: "canonical query
/// key"). Used by the query processor (C10).
pub fn stem_line_to_sorted_set(line: &str) -> std::collections::BTreeSet<String> {
    parse(line).into_iter().collect()
}
