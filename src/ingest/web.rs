//! Text-to-index conversion shared by the URL ingestion path (C8, C9).
//!
//! The spec's source draws a distinction between the file path (every
//! parsed token consumes a position) and the URL path (an empty stemmed
//! token is skipped without consuming one). Because [`crate::tokenize::parse`]
//! already filters out empty tokens before *and* after stemming, both
//! paths are given the same non-empty token stream here, closing that gap
//! uniformly rather than replicating an asymmetry that has no observable
//! effect with this tokeniser (documented as an Open Question resolution
//! in `DESIGN.md`).

use crate::index::Index;
use crate::tokenize;

/// Build a private sub-index from already-cleaned text for `location`,
/// assigning consecutive 1-based positions to every stemmed token.
pub fn index_from_text(text: &str, location: &str) -> Index {
    let mut index = Index::new();
    for (i, token) in tokenize::parse(text).into_iter().enumerate() {
        index.insert(&token, location, i as u32 + 1);
    }
    index
}
