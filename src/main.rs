//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `play_rank` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the run result to an exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::{io, process};

use play_rank::initialization::init_logger_with;
use play_rank::{report_outcome, run_scrape, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Malformed options exit here with a usage error, before any request.
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Transport failures propagate and end the process with a non-zero status.
    let report = run_scrape(config).await?;

    let code = report_outcome(&report, io::stderr());
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
