//! Shared fixtures for the integration/property test binaries.

use lexirank::index::concurrent::ConcurrentIndex;
use lexirank::index::Index;
use std::fs;
use std::path::Path;

/// Build a shared index from `(location, text)` pairs the same way an
/// ingestion task does: a local sub-index per document, merged once.
pub fn index_from_corpus(corpus: &[(&str, &str)]) -> ConcurrentIndex {
    let shared = ConcurrentIndex::new();
    for (location, text) in corpus {
        let mut local = Index::new();
        for (i, token) in lexirank::tokenize::parse(text).into_iter().enumerate() {
            local.insert(&token, location, i as u32 + 1);
        }
        shared.merge(&local);
    }
    shared
}

/// Write `(relative_path, content)` pairs under `dir`, creating parent
/// directories as needed. Used to build on-disk fixtures for the walker
/// and file-ingestion tests.
pub fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

/// The §8 scenario-1/2 corpus: `a.txt = "The quick brown fox"`, `b.txt =
/// "quick foxes"`.
pub fn scenario_corpus() -> Vec<(&'static str, &'static str)> {
    vec![("a.txt", "The quick brown fox"), ("b.txt", "quick foxes")]
}
