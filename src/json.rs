//! Pretty-printed JSON output (C11): `counts.json`, `index.json`, and
//! `results.json`, two-space indent, `\n` line endings.
//!
//! `counts.json` and `index.json` have no float formatting concerns, so
//! they go through `serde_json`'s pretty printer directly — its `Map` is
//! `BTreeMap`-backed by default, which is exactly the word/location
//! ordering §3 requires. `results.json` needs `score` rendered with
//! exactly eight digits after the decimal point, which `serde_json`'s
//! `Number` can't express without the `arbitrary_precision` feature, so it
//! is hand-built instead. Rust's `{:.8}` uses round-half-to-even; the
//! spec's Java source defaults to round-half-up. We document choosing the
//! former (DESIGN.md) rather than hand-rolling a half-up formatter.

use crate::types::{Location, Position, SearchResult, Word};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Write `counts.json`: `{ "location": wordCount, ... }`.
pub fn write_counts(path: &std::path::Path, counts: &BTreeMap<Location, Position>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(counts)
        .map_err(|e| format!("failed to serialize counts: {e}"))?;
    write_file(path, &json)
}

/// Write `index.json`: `{ "word": { "location": [positions...], ... }, ... }`.
pub fn write_index(
    path: &std::path::Path,
    words: &BTreeMap<Word, BTreeMap<Location, std::collections::BTreeSet<Position>>>,
) -> Result<(), String> {
    let json = serde_json::to_string_pretty(words)
        .map_err(|e| format!("failed to serialize index: {e}"))?;
    write_file(path, &json)
}

/// Write `results.json`: `{ "query": [ { "count": n, "score": s, "where": "loc" }, ... ], ... }`.
pub fn write_results(
    path: &std::path::Path,
    results: &BTreeMap<String, Vec<SearchResult>>,
) -> Result<(), String> {
    let json = render_results(results);
    write_file(path, &json)
}

fn render_results(results: &BTreeMap<String, Vec<SearchResult>>) -> String {
    let mut out = String::new();
    out.push_str("{\n");

    let mut query_entries = results.iter().peekable();
    while let Some((query, rows)) = query_entries.next() {
        let _ = write!(out, "  {}: ", quote(query));
        render_rows(&mut out, rows);
        out.push_str(if query_entries.peek().is_some() { ",\n" } else { "\n" });
    }

    out.push_str("}\n");
    out
}

fn render_rows(out: &mut String, rows: &[SearchResult]) {
    if rows.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push_str("[\n");
    let mut rows_iter = rows.iter().peekable();
    while let Some(row) = rows_iter.next() {
        let _ = write!(
            out,
            "    {{\n      \"count\": {},\n      \"score\": {:.8},\n      \"where\": {}\n    }}",
            row.match_count,
            row.score,
            quote(&row.location)
        );
        out.push_str(if rows_iter.peek().is_some() { ",\n" } else { "\n" });
    }
    out.push_str("  ]");
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).expect("string serialization cannot fail")
}

fn write_file(path: &std::path::Path, json: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
        }
    }
    let content = if json.ends_with('\n') {
        json.to_string()
    } else {
        format!("{json}\n")
    };
    std::fs::write(path, content).map_err(|e| format!("failed to write {}: {}", path.display(), e))
}
