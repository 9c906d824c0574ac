//! Application initialization.
//!
//! Sets up the logger and the HTTP client before a run.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
