//! `lexirank` CLI: ingest text/HTML corpora, answer queries, and write
//! the index/counts/results out as JSON (§6, §7).
//!
//! Every stage is independent: a failure in one is printed to stdout and
//! the run proceeds to the next flag. The process always exits 0 — per §6,
//! "exit code is 0 regardless of per-stage failures."

use lexirank::cli::{display, Config};
use lexirank::index::concurrent::ConcurrentIndex;
use lexirank::pool::WorkQueue;
use lexirank::{Location, Position, Word};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

type WordMap = BTreeMap<Word, BTreeMap<Location, BTreeSet<Position>>>;

fn main() {
    let config = Config::parse(std::env::args().skip(1));
    if !config.saw_recognized_flag {
        print_usage();
    }
    run(&config);
}

fn print_usage() {
    println!("lexirank -text <dir> | -html <url> -crawl <n> [-query <file>] [-partial]");
    println!("         [-counts <path>] [-index <path>] [-results <path>] [-threads <n>]");
}

fn run(config: &Config) {
    let started = Instant::now();
    display::section_top("lexirank");

    let pool = Arc::new(WorkQueue::new(config.threads));
    let index = Arc::new(ConcurrentIndex::new());

    if let Some(text_path) = &config.text {
        run_text_stage(text_path, &index, &pool);
    }

    if let Some(seed_url) = &config.html {
        run_crawl_stage(seed_url, config.crawl_limit, &pool, &index);
    }

    let mut results = BTreeMap::new();
    if let Some(query_path) = &config.query {
        results = run_query_stage(query_path, &index, config.partial, &pool);
    }

    pool.shutdown_and_join();

    let words = write_outputs(config, &index, &results);
    print_summary(&words, started);

    display::section_bot();
}

fn print_summary(words: &WordMap, started: Instant) {
    let unique_words = words.len();
    let locations: BTreeSet<_> = words.values().flat_map(|l| l.keys()).collect();
    let total_positions: usize = words.values().flat_map(|l| l.values()).map(|p| p.len()).sum();
    display::row(&format!(
        "{unique_words} word(s), {} location(s), {total_positions} position(s), {:.2?}",
        locations.len(),
        started.elapsed(),
    ));
}

/// Enqueue one ingest task per discovered file and block until every one
/// of them has merged into `index`. The crawl and query stages that follow
/// in `run` depend on this: the query stage searches `index` on the same
/// pool, so ingestion must be fully drained first or a search can run
/// against a partially-merged index (§5, §8 scenarios 1/2/6).
fn run_text_stage(text_path: &str, index: &Arc<ConcurrentIndex>, pool: &Arc<WorkQueue>) {
    let root = Path::new(text_path);
    match lexirank::walker::collect_text_files(root) {
        Ok(files) => {
            display::row(&display::stage_status("ingest", true, &format!("{} file(s)", files.len())));
            let bar = display::progress_bar(files.len() as u64, "ingest");
            for file in files {
                let index = Arc::clone(index);
                let bar = bar.clone();
                pool.execute(move || {
                    if let Err(e) = lexirank::ingest_file(&file, &index) {
                        println!("ingest error: {e}");
                    }
                    bar.inc(1);
                });
            }
            pool.finish();
            bar.finish_and_clear();
        }
        Err(e) => println!("ingest error: {e}"),
    }
}

/// Crawl's total URL count isn't known ahead of time (§4.5: the limit
/// bounds distinct URLs *enqueued*, not a fixed corpus size), so this
/// drives an indeterminate spinner rather than a counted bar while
/// `crawl` blocks, instead of the counted bar the ingest stage uses.
fn run_crawl_stage(seed_url: &str, limit: usize, pool: &Arc<WorkQueue>, index: &Arc<ConcurrentIndex>) {
    let spinner = display::spinner("crawl");
    let result = lexirank::crawl(seed_url, limit, pool, index);
    spinner.finish_and_clear();
    match result {
        Ok(()) => display::row(&display::stage_status("crawl", true, &format!("limit {limit}"))),
        Err(e) => println!("crawl error: {e}"),
    }
}

fn run_query_stage(
    query_path: &str,
    index: &Arc<ConcurrentIndex>,
    partial: bool,
    pool: &Arc<WorkQueue>,
) -> BTreeMap<String, Vec<lexirank::SearchResult>> {
    match lexirank::process_query_file(Path::new(query_path), index, partial, pool) {
        Ok(results) => {
            display::row(&display::stage_status("query", true, &format!("{} quer(ies)", results.len())));
            results
        }
        Err(e) => {
            println!("query error: {e}");
            BTreeMap::new()
        }
    }
}

fn write_outputs(
    config: &Config,
    index: &Arc<ConcurrentIndex>,
    results: &BTreeMap<String, Vec<lexirank::SearchResult>>,
) -> WordMap {
    let counts = index.get_word_counts();
    if let Err(e) = lexirank::json::write_counts(Path::new(&config.counts_path), &counts) {
        println!("failed to write {}: {}", config.counts_path, e);
    }

    let words = index.get_words();
    if let Err(e) = lexirank::json::write_index(Path::new(&config.index_path), &words) {
        println!("failed to write {}: {}", config.index_path, e);
    }

    if config.query.is_some() {
        if let Err(e) = lexirank::json::write_results(Path::new(&config.results_path), results) {
            println!("failed to write {}: {}", config.results_path, e);
        }
    }

    words
}
