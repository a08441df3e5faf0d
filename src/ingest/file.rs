//! File ingestion task (C8).

use crate::index::concurrent::ConcurrentIndex;
use crate::index::Index;
use crate::tokenize;
use crate::types::Position;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Stream `path` line by line, tokenise each line, and assign consecutive
/// positions starting at 1 across the whole file. Builds a private
/// sub-index, then merges it into `shared` exactly once.
pub fn ingest_file(path: &Path, shared: &ConcurrentIndex) -> Result<(), String> {
    let local = build_local_index(path)?;
    shared.merge(&local);
    Ok(())
}

fn build_local_index(path: &Path) -> Result<Index, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);
    let location = path.to_string_lossy().to_string();

    let mut index = Index::new();
    let mut position: Position = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        for token in tokenize::parse(&line) {
            position += 1;
            index.insert(&token, &location, position);
        }
    }

    Ok(index)
}
