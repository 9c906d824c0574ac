//! JSON output.

use std::io::Write;

use crate::error_handling::ExportError;
use crate::models::RankedEntry;

/// Writes entries as a pretty-printed JSON array followed by a newline.
///
/// Objects carry `rank`, `app_id` and `title` in that order. Indentation is two
/// spaces and non-ASCII text is emitted as-is rather than `\u` escaped.
pub fn write_json<W: Write>(mut writer: W, entries: &[RankedEntry]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
