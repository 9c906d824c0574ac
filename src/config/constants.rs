//! Configuration constants.
//!
//! Endpoint, request identity, timeouts and CLI defaults.

use std::time::Duration;

/// Ranking collection page that is scraped.
pub const COLLECTION_URL: &str = "https://play.google.com/store/apps/collection/topgrossing";

/// Desktop Chrome User-Agent.
///
/// The collection page only serves the anchor markup the extractor expects to
/// clients that look like a desktop browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Request timeout in seconds (connect + full body).
pub const FETCH_TIMEOUT_SECS: u64 = 20;
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(FETCH_TIMEOUT_SECS);

pub const DEFAULT_LANGUAGE: &str = "ko";
pub const DEFAULT_REGION: &str = "KR";
pub const DEFAULT_LIMIT: usize = 50;

/// Printed to stderr when a run produces no entries.
pub const EMPTY_RESULT_MESSAGE: &str = "No entries found. HTML structure may have changed.";

/// Exit status for a run that produced no entries.
pub const EXIT_EMPTY_RESULT: i32 = 1;
