//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, user agent, timeout, defaults)
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, Limit, LogFormat, LogLevel};
