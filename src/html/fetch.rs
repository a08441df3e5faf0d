//! HTML fetching with a bounded redirect chain (C3, §4.5).

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Maximum redirect hops a single fetch will follow, per §4.5.
const MAX_REDIRECTS: usize = 3;

/// Build a blocking client with the crawler's redirect and timeout policy.
/// Blocking, not async: every fetch runs on a worker thread from the
/// bounded pool (C7), which is the crate's only concurrency unit.
pub fn new_client() -> Client {
    Client::builder()
        .redirect(Policy::limited(MAX_REDIRECTS))
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Fetch `url` and return its body. Per §7's `FetchFailure` contract, any
/// failure (non-200 status, malformed URL, IO error, timeout) yields an
/// empty string rather than an error — the caller still runs its task to
/// completion, it just indexes nothing for this location.
pub fn fetch_html(client: &Client, url: &str) -> String {
    match client.get(url).send() {
        Ok(response) if response.status().is_success() => {
            response.text().unwrap_or_default()
        }
        _ => String::new(),
    }
}
