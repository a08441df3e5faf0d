//! §8 scenario 6: "cat dog" and "dog cat" collapse to one canonical key.

use crate::common::index_from_corpus;
use lexirank::pool::WorkQueue;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn reordered_duplicate_queries_collapse_to_a_single_results_entry() {
    let dir = tempdir().unwrap();
    let query_path = dir.path().join("queries.txt");
    fs::write(&query_path, "cat dog\ndog cat\nCAT DOG\n").unwrap();

    let index = Arc::new(index_from_corpus(&[("a.txt", "cat dog cat"), ("b.txt", "dog")]));
    let pool = Arc::new(WorkQueue::new(4));

    let results = lexirank::process_query_file(&query_path, &index, false, &pool).unwrap();
    pool.shutdown_and_join();

    assert_eq!(results.len(), 1);
    assert!(results.contains_key("cat dog"));
}
