//! Search query processor (C10): read a query file, dedupe queries, run
//! each one exactly once, and collect results keyed by canonical query.

use crate::index::concurrent::ConcurrentIndex;
use crate::pool::WorkQueue;
use crate::tokenize;
use crate::types::SearchResult;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// Stem `line` to its canonical query key and run the search, but only if
/// this key hasn't been searched yet. The check-then-insert and the
/// search itself happen inside one critical section, closing the
/// duplicate-search race the spec's source admits when the two are split
/// into separate locks (§4.6, §9 open question).
fn parse_query_line(
    line: &str,
    index: &ConcurrentIndex,
    partial: bool,
    results: &Mutex<BTreeMap<String, Vec<SearchResult>>>,
) {
    let stems = tokenize::stem_line_to_sorted_set(line);
    if stems.is_empty() {
        return;
    }
    let key = stems.iter().cloned().collect::<Vec<_>>().join(" ");

    let mut guard = results.lock();
    if guard.contains_key(&key) {
        return;
    }
    let found = index.search(&stems, partial);
    guard.insert(key, found);
}

/// Read `path` line by line, enqueueing one task per line onto `pool`, and
/// wait for all of them to finish before returning — even if reading the
/// file itself fails partway through, matching the spec's try/finally
/// contract: `finish()` is always awaited.
pub fn process_query_file(
    path: &Path,
    index: &Arc<ConcurrentIndex>,
    partial: bool,
    pool: &Arc<WorkQueue>,
) -> Result<BTreeMap<String, Vec<SearchResult>>, String> {
    let results = Arc::new(Mutex::new(BTreeMap::new()));

    let read_outcome = enqueue_all_lines(path, index, partial, pool, &results);
    pool.finish();
    read_outcome?;

    Ok(Arc::try_unwrap(results)
        .map(Mutex::into_inner)
        .unwrap_or_else(|arc| arc.lock().clone()))
}

fn enqueue_all_lines(
    path: &Path,
    index: &Arc<ConcurrentIndex>,
    partial: bool,
    pool: &Arc<WorkQueue>,
    results: &Arc<Mutex<BTreeMap<String, Vec<SearchResult>>>>,
) -> Result<(), String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let index = Arc::clone(index);
        let results = Arc::clone(results);
        pool.execute(move || parse_query_line(&line, &index, partial, &results));
    }
    Ok(())
}
