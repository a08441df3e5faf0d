//! Bounded breadth-first web crawler (C9).
//!
//! A shared, mutex-protected `visited` set bounds the crawl to at most
//! `limit` distinct URLs ever enqueued — not crawl depth. Each per-task
//! unit does its own fetch, link extraction (from the raw HTML, using the
//! page URL as base), enqueue decisions under the `visited` lock, and
//! finally tokenises the cleaned text and merges into the shared index.
//! Per §5's lock-ordering rule, `visited` is always released before the
//! index's write lock is taken — the two critical sections never nest.

use crate::html::{self, fetch, links};
use crate::index::concurrent::ConcurrentIndex;
use crate::ingest::web::index_from_text;
use crate::pool::WorkQueue;
use reqwest::blocking::Client;
use std::collections::BTreeSet;
use std::sync::Arc;
use url::Url;

use parking_lot::Mutex;

/// Crawl starting at `seed`, visiting at most `limit` distinct URLs, and
/// merging every fetched page's text into `index`. Blocks until the crawl
/// is fully drained (it calls `pool.finish()` internally).
///
/// Per §7, a malformed seed URL skips the crawl entirely rather than
/// failing the whole run.
pub fn crawl(
    seed: &str,
    limit: usize,
    pool: &Arc<WorkQueue>,
    index: &Arc<ConcurrentIndex>,
) -> Result<(), String> {
    let seed_url = Url::parse(seed).map_err(|e| format!("malformed seed URL {seed:?}: {e}"))?;
    let seed_url = links::normalize_url(seed_url);

    let visited = Arc::new(Mutex::new(BTreeSet::new()));
    visited.lock().insert(seed_url.to_string());

    let client = fetch::new_client();
    enqueue(pool, &visited, &client, index, seed_url, limit);
    pool.finish();
    Ok(())
}

fn enqueue(
    pool: &Arc<WorkQueue>,
    visited: &Arc<Mutex<BTreeSet<String>>>,
    client: &Client,
    index: &Arc<ConcurrentIndex>,
    url: Url,
    limit: usize,
) {
    let task_pool = Arc::clone(pool);
    let task_visited = Arc::clone(visited);
    let task_client = client.clone();
    let task_index = Arc::clone(index);

    pool.execute(move || {
        crawl_task(&task_pool, &task_visited, &task_client, &task_index, url, limit)
    });
}

fn crawl_task(
    pool: &Arc<WorkQueue>,
    visited: &Arc<Mutex<BTreeSet<String>>>,
    client: &Client,
    index: &Arc<ConcurrentIndex>,
    url: Url,
    limit: usize,
) {
    let raw_html = fetch::fetch_html(client, url.as_str());
    let discovered = links::extract_links(&raw_html, &url);

    {
        let mut guard = visited.lock();
        for link in discovered {
            if guard.len() >= limit {
                break;
            }
            let key = link.to_string();
            if guard.insert(key) {
                enqueue(pool, visited, client, index, link, limit);
            }
        }
    }

    let text = html::strip_all_tags(&raw_html);
    let local = index_from_text(&text, url.as_str());
    index.merge(&local);
}
