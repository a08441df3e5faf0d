//! Full ingest → query → JSON-write pipeline, exercising the same call
//! sequence `main.rs` drives, without going through the CLI binary.

use crate::common::write_corpus;
use lexirank::index::concurrent::ConcurrentIndex;
use lexirank::json::{write_counts, write_index, write_results};
use lexirank::pool::WorkQueue;
use lexirank::walker::collect_text_files;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn ingesting_a_directory_then_querying_produces_consistent_json_outputs() {
    let corpus_dir = tempdir().unwrap();
    write_corpus(
        corpus_dir.path(),
        &[("a.txt", "the quick brown fox"), ("nested/b.txt", "quick foxes")],
    );

    let index = Arc::new(ConcurrentIndex::new());
    let pool = Arc::new(WorkQueue::new(4));

    for file in collect_text_files(corpus_dir.path()).unwrap() {
        let index = Arc::clone(&index);
        pool.execute(move || {
            lexirank::ingest_file(&file, &index).unwrap();
        });
    }
    pool.finish();

    let query_dir = tempdir().unwrap();
    let query_path = query_dir.path().join("queries.txt");
    fs::write(&query_path, "quick\n").unwrap();
    let results = lexirank::process_query_file(&query_path, &index, false, &pool).unwrap();
    pool.shutdown_and_join();

    let out_dir = tempdir().unwrap();
    write_counts(&out_dir.path().join("counts.json"), &index.get_word_counts()).unwrap();
    write_index(&out_dir.path().join("index.json"), &index.get_words()).unwrap();
    write_results(&out_dir.path().join("results.json"), &results).unwrap();

    let index_json = fs::read_to_string(out_dir.path().join("index.json")).unwrap();
    assert!(index_json.contains("\"quick\""));

    let results_json = fs::read_to_string(out_dir.path().join("results.json")).unwrap();
    assert!(results_json.contains("\"score\": 0.5"));
}
