//! CLI flag parsing (§6, §A3 of `SPEC_FULL.md`).
//!
//! §6's contract — unknown flags are ignored, and the whole run always
//! exits 0 regardless of per-stage failure — doesn't fit `clap`'s
//! fail-fast, unknown-flag-rejecting defaults, so this is a small
//! hand-rolled flag/value scanner rather than a `clap::Parser` derive (see
//! `DESIGN.md` for the full rationale). Defaults come from §6's table.

pub mod display;

const DEFAULT_THREADS: usize = 5;
const DEFAULT_CRAWL_LIMIT: usize = 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub text: Option<String>,
    pub html: Option<String>,
    pub crawl_limit: usize,
    pub threads: usize,
    pub query: Option<String>,
    pub partial: bool,
    pub counts_path: String,
    pub index_path: String,
    pub results_path: String,
    /// Set once any recognised flag is seen. Used only to print a usage
    /// line (§B6) when the user passed nothing lexirank understands; it
    /// never changes §6's "unknown flags ignored" parsing behavior.
    pub saw_recognized_flag: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            html: None,
            crawl_limit: DEFAULT_CRAWL_LIMIT,
            threads: DEFAULT_THREADS,
            query: None,
            partial: false,
            counts_path: "counts.json".to_string(),
            index_path: "index.json".to_string(),
            results_path: "results.json".to_string(),
            saw_recognized_flag: false,
        }
    }
}

impl Config {
    /// Parse `args` (typically `std::env::args().skip(1)`). Unknown flags,
    /// and a value-less flag at the end of the list, are silently ignored
    /// rather than rejected — this never fails.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = Self::default();
        let mut iter = args.into_iter();

        while let Some(flag) = iter.next() {
            if matches!(
                flag.as_str(),
                "-text" | "-html" | "-crawl" | "-threads" | "-query" | "-partial" | "-counts" | "-index" | "-results"
            ) {
                config.saw_recognized_flag = true;
            }
            match flag.as_str() {
                "-text" => config.text = iter.next(),
                "-html" => config.html = iter.next(),
                "-crawl" => {
                    if let Some(n) = iter.next().and_then(|v| v.parse().ok()) {
                        config.crawl_limit = n;
                    }
                }
                "-threads" => {
                    let parsed = iter.next().and_then(|v| v.parse::<usize>().ok());
                    config.threads = match parsed {
                        Some(n) if n >= 1 => n,
                        _ => DEFAULT_THREADS,
                    };
                }
                "-query" => config.query = iter.next(),
                "-partial" => config.partial = true,
                "-counts" => {
                    if let Some(v) = iter.next() {
                        config.counts_path = v;
                    }
                }
                "-index" => {
                    if let Some(v) = iter.next() {
                        config.index_path = v;
                    }
                }
                "-results" => {
                    if let Some(v) = iter.next() {
                        config.results_path = v;
                    }
                }
                _ => {} // unknown flags are ignored, per §6
            }
        }

        config
    }
}
