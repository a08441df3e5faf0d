//! HTML fetching, cleaning, and link extraction (C3, C4).

pub mod clean;
pub mod fetch;
pub mod links;

pub use clean::strip_all_tags;
pub use fetch::{fetch_html, new_client};
pub use links::extract_links;
