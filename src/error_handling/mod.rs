//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and output
//! - Categorization of transport errors from `reqwest`
//!
//! Nothing here retries: a transport failure aborts the run.

mod categorization;
mod types;

pub use categorization::categorize_reqwest_error;
pub use types::{ExportError, InitializationError, ScrapeError};
