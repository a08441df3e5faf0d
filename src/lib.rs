//! A concurrent inverted-index search engine: tokenize, ingest files and
//! crawled web pages, and answer exact/prefix queries against a shared
//! index built by a bounded worker pool.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐   ┌────────────┐   ┌───────────────────┐
//! │ tokenize  │──▶│ index      │◀──│ index::concurrent │
//! │ (stem,    │   │ (BTreeMap- │   │ (RwLock, many     │
//! │ normalize)│   │  backed)   │   │  readers/1 writer)│
//! └───────────┘   └────────────┘   └─────────┬──────────┘
//!                                             │
//!       ┌─────────────────┬───────────────────┼───────────────┐
//!       ▼                 ▼                   ▼               ▼
//! ┌──────────┐     ┌──────────────┐    ┌─────────────┐  ┌───────────┐
//! │ walker   │     │ html         │    │ ingest      │  │ query     │
//! │ (*.txt   │     │ (fetch/clean/│    │ (file/web,  │  │ (dedup +  │
//! │  discovery)│   │  links)      │    │  merge-once)│  │  search)  │
//! └──────────┘     └──────────────┘    └─────────────┘  └───────────┘
//!                         │                   ▲
//!                         ▼                   │
//!                   ┌──────────┐              │
//!                   │ crawl    │──────────────┘
//!                   │ (bounded │
//!                   │  BFS)    │
//!                   └──────────┘
//!
//!                 ┌──────┐      ┌──────┐
//!                 │ pool │      │ json │
//!                 │ (work│      │ (out-│
//!                 │ queue)│     │ put) │
//!                 └──────┘      └──────┘
//! ```
//!
//! Every ingestion task — a file, a query line, a crawled page — builds a
//! private local [`index::Index`] and merges it into the shared
//! [`index::concurrent::ConcurrentIndex`] exactly once, keeping each
//! task's write-side critical section proportional to its own output.

pub mod cli;
pub mod crawl;
pub mod html;
pub mod index;
pub mod ingest;
pub mod json;
pub mod pool;
pub mod query;
#[doc(hidden)]
pub mod testing;
pub mod tokenize;
pub mod types;
mod utils;
pub mod walker;

pub use crawl::crawl;
pub use index::concurrent::ConcurrentIndex;
pub use index::Index;
pub use ingest::{ingest_file, index_from_text};
pub use pool::WorkQueue;
pub use query::process_query_file;
pub use types::{compare_results, sort_results, Location, Position, SearchResult, Word};
pub use utils::normalize;
