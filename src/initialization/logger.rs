//! Logger initialization.
//!
//! All records go to stderr; stdout is reserved for the CSV/JSON ranking.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

/// Ceilings for the crates a scrape run pulls in: the HTTP stack and the
/// html5ever tokenizer used for label unescaping.
const DEPENDENCY_LEVELS: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
];

/// Initializes the logger with the specified level and format.
///
/// The level comes from `--log-level` only; `RUST_LOG` is not consulted.
/// `LogFormat::Plain` prints one colored line per record,
/// `LogFormat::Json` prints one `{ts, level, target, msg}` object per line.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .filter_module("play_rank", level)
        .target(env_logger::Target::Stderr);
    for (module, ceiling) in DEPENDENCY_LEVELS {
        builder.filter_module(module, level.min(*ceiling));
    }

    match format {
        LogFormat::Json => builder.format(write_json_record),
        LogFormat::Plain => builder.format(write_plain_record),
    };

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn write_json_record(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let msg = serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into());
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        msg
    )
}

fn write_plain_record(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let (marker, label) = match record.level() {
        Level::Error => ("❌", "ERROR".red()),
        Level::Warn => ("⚠️", "WARN".yellow()),
        Level::Info => ("✔️", "INFO".green()),
        Level::Debug => ("🔍", "DEBUG".blue()),
        Level::Trace => ("🔬", "TRACE".purple()),
    };
    writeln!(
        buf,
        "{} {} [{}] {}",
        marker,
        record.target().cyan(),
        label,
        record.args()
    )
}
