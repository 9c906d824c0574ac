//! play_rank library: Google Play ranking page scraping.
//!
//! Fetches one collection (ranking) page, extracts the ordered list of
//! application ids and titles from its detail-page anchors, and renders the
//! result as CSV or JSON.
//!
//! # Example
//!
//! ```no_run
//! use play_rank::{run_scrape, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     category: Some("GAME".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_scrape(config).await?;
//! eprintln!("{} of {} entries written", report.emitted, report.extracted);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The fetch is async; call the run functions from a Tokio runtime. The CLI
//! uses a current-thread runtime since a run is a single request.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
mod utils;

pub use app::{build_url, build_url_with_base, trim_entries};
pub use config::{Config, Limit, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError, ScrapeError};
pub use export::{write_csv, write_entries, write_json, OutputFormat};
pub use fetch::fetch_html;
pub use models::RankedEntry;
pub use parse::extract_entries;
pub use run::{evaluate_exit_code, report_outcome, run_scrape, run_scrape_to, ScrapeReport};

mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::io::Write;

    use crate::app::{build_url_with_base, trim_entries};
    use crate::config::{Config, EMPTY_RESULT_MESSAGE, EXIT_EMPTY_RESULT};
    use crate::export::{write_entries, write_to_stdout, OutputFormat};
    use crate::fetch::fetch_html;
    use crate::initialization::init_client;
    use crate::models::RankedEntry;
    use crate::parse::extract_entries;

    /// Results of a scrape run.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// URL that was fetched
        pub url: String,
        /// Number of entries extracted before trimming
        pub extracted: usize,
        /// Number of entries written after trimming
        pub emitted: usize,
        /// Format the entries were rendered in
        pub format: OutputFormat,
    }

    /// Runs a scrape and writes the result to stdout.
    ///
    /// Output is rendered even when no entries were found; use
    /// [`evaluate_exit_code`] on the report to decide the process status.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL, the HTTP client
    /// cannot be built, the request fails, or stdout cannot be written.
    pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
        let (report, entries) = scrape(&config).await?;
        write_to_stdout(&entries, report.format).context("Failed to write output")?;
        Ok(report)
    }

    /// Same as [`run_scrape`], writing to `writer` instead of stdout.
    pub async fn run_scrape_to<W: Write>(config: Config, writer: W) -> Result<ScrapeReport> {
        let (report, entries) = scrape(&config).await?;
        write_entries(writer, &entries, report.format).context("Failed to write output")?;
        Ok(report)
    }

    /// Maps a finished run to a process exit status: 0 when at least one entry
    /// was written, `EXIT_EMPTY_RESULT` otherwise.
    pub fn evaluate_exit_code(report: &ScrapeReport) -> i32 {
        if report.emitted == 0 {
            EXIT_EMPTY_RESULT
        } else {
            0
        }
    }

    /// Writes the empty-result diagnostic to `diagnostics` when the run
    /// produced nothing, and returns the exit status for the run.
    pub fn report_outcome<W: Write>(report: &ScrapeReport, mut diagnostics: W) -> i32 {
        let code = evaluate_exit_code(report);
        if code != 0 {
            // Diagnostics stream is best effort; the exit status carries the result.
            let _ = writeln!(diagnostics, "{EMPTY_RESULT_MESSAGE}");
        }
        code
    }

    async fn scrape(config: &Config) -> Result<(ScrapeReport, Vec<RankedEntry>)> {
        let url = build_url_with_base(
            &config.endpoint,
            &config.hl,
            &config.gl,
            config.category.as_deref(),
        )?;
        let client = init_client().context("Failed to initialize HTTP client")?;

        let html = fetch_html(&client, &url)
            .await
            .context("Failed to fetch ranking page")?;

        let extracted = extract_entries(&html);
        let extracted_count = extracted.len();
        let entries = trim_entries(extracted, config.limit.as_option());

        let report = ScrapeReport {
            url,
            extracted: extracted_count,
            emitted: entries.len(),
            format: OutputFormat::from_json_flag(config.json),
        };
        info!(
            "Extracted {} entries, emitting {} as {}",
            report.extracted, report.emitted, report.format
        );

        Ok((report, entries))
    }
}
