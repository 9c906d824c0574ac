//! Pipeline helpers around the extractor.
//!
//! This module provides:
//! - Request URL construction
//! - Result trimming

pub mod trim;
pub mod url;

pub use trim::trim_entries;
pub use url::{build_url, build_url_with_base};
