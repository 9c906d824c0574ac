//! Output rendering.
//!
//! Renders the ranked list as CSV or JSON. The CLI always writes to stdout;
//! the writer-generic functions exist so the same code can be tested in memory.

mod csv;
mod json;
mod pipe;
mod types;

use std::io::{self, Write};

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::types::OutputFormat;

use crate::error_handling::ExportError;
use crate::models::RankedEntry;

/// Writes `entries` to `writer` in the given format.
pub fn write_entries<W: Write>(
    writer: W,
    entries: &[RankedEntry],
    format: OutputFormat,
) -> Result<(), ExportError> {
    match format {
        OutputFormat::Csv => write_csv(writer, entries),
        OutputFormat::Json => write_json(writer, entries),
    }
}

/// Writes `entries` to stdout, ignoring a closed downstream pipe.
pub fn write_to_stdout(entries: &[RankedEntry], format: OutputFormat) -> Result<(), ExportError> {
    let stdout = io::stdout();
    let writer = pipe::IgnoreBrokenPipe::new(stdout.lock());
    write_entries(writer, entries, format)
}
