//! HTML parsing.
//!
//! Recovers the ranked application list from a collection page.

mod entries;

pub use entries::extract_entries;
