//! CSV output.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::error_handling::ExportError;
use crate::models::RankedEntry;

const CSV_HEADER: [&str; 3] = ["rank", "app_id", "title"];

/// Writes entries as CSV with a `rank,app_id,title` header.
///
/// The header is written even when `entries` is empty. Fields are quoted only
/// when they contain a comma, quote or line break, and records end in `\r\n`.
pub fn write_csv<W: Write>(writer: W, entries: &[RankedEntry]) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        let rank = entry.rank.to_string();
        writer.write_record([rank.as_str(), entry.app_id.as_str(), entry.title.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}
