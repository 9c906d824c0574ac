//! Output format selection.

use std::fmt;

/// Rendering for the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `rank,app_id,title` rows (default)
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl OutputFormat {
    /// Maps the `--json` switch to a format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Csv
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}
