//! Ingest driver (C8): per-file and per-URL tasks that build a private
//! local sub-index and merge it into the shared index exactly once.
//!
//! Keeping each task's write-side critical section proportional to its own
//! output (not the whole corpus) is the reason both paths build a local
//! [`crate::index::Index`] first and call [`crate::index::concurrent::ConcurrentIndex::merge`]
//! only at the very end.

pub mod file;
pub mod web;

pub use file::ingest_file;
pub use web::index_from_text;
