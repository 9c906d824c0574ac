//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::config::constants::{COLLECTION_URL, DEFAULT_LANGUAGE, DEFAULT_LIMIT, DEFAULT_REGION};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Maximum number of entries to emit.
///
/// Parsed from `--limit`: a non-negative integer, or `none` / `all` for no cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Keep at most this many entries
    Count(usize),
    /// Keep every extracted entry
    Unlimited,
}

impl Limit {
    /// The cap as an `Option`, `None` meaning unlimited.
    pub fn as_option(self) -> Option<usize> {
        match self {
            Limit::Count(n) => Some(n),
            Limit::Unlimited => None,
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit::Count(DEFAULT_LIMIT)
    }
}

impl FromStr for Limit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Limit::Unlimited);
        }
        trimmed
            .parse::<usize>()
            .map(Limit::Count)
            .map_err(|e| format!("invalid limit '{s}': {e} (expected a non-negative integer or 'none')"))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{n}"),
            Limit::Unlimited => f.write_str("none"),
        }
    }
}

/// Run configuration.
///
/// Parsed from the command line by `clap`; can also be constructed
/// programmatically from `Default`.
///
/// # Examples
///
/// ```bash
/// # Korean top grossing, CSV, first 50 entries
/// play_rank
///
/// # US games as JSON, everything on the page
/// play_rank --hl en --gl US --category GAME --limit none --json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "play_rank",
    about = "Scrape the Google Play top grossing ranking (collection) page."
)]
pub struct Config {
    /// Language code
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub hl: String,

    /// Region code
    #[arg(long, default_value = DEFAULT_REGION)]
    pub gl: String,

    /// Optional category (e.g. GAME, BUSINESS)
    #[arg(long)]
    pub category: Option<String>,

    /// Limit results: a non-negative integer, or 'none' for no limit. Negative values are rejected
    #[arg(long, default_value_t = Limit::default())]
    pub limit: Limit,

    /// Output JSON instead of CSV
    #[arg(long)]
    pub json: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Collection endpoint; not exposed on the command line
    #[arg(skip = COLLECTION_URL.to_string())]
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hl: DEFAULT_LANGUAGE.to_string(),
            gl: DEFAULT_REGION.to_string(),
            category: None,
            limit: Limit::default(),
            json: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            endpoint: COLLECTION_URL.to_string(),
        }
    }
}
