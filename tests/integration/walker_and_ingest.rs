//! Walker + file ingestion: a directory of mixed extensions collapses
//! into one shared index keyed by each file's path.

use crate::common::write_corpus;
use lexirank::index::concurrent::ConcurrentIndex;
use lexirank::walker::collect_text_files;
use tempfile::tempdir;

#[test]
fn only_txt_and_text_files_are_discovered_and_ingested() {
    let dir = tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("notes.txt", "alpha beta"),
            ("draft.text", "gamma delta"),
            ("README.md", "ignored markdown"),
        ],
    );

    let files = collect_text_files(dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    let index = ConcurrentIndex::new();
    for file in &files {
        lexirank::ingest_file(file, &index).unwrap();
    }

    assert!(index.contains_word("alpha"));
    assert!(index.contains_word("gamma"));
    assert!(!index.contains_word("ignored"));
}
