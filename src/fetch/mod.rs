//! Page fetching.
//!
//! One GET per run. Transport errors are categorized and returned to the
//! caller; there are no retries.

use log::{debug, info};

use crate::error_handling::{categorize_reqwest_error, ScrapeError};

/// Fetches `url` and returns the body as text.
///
/// The client is expected to carry the browser User-Agent and timeout set up by
/// [`crate::initialization::init_client`]. Non-success statuses are errors. The
/// body is decoded as UTF-8 with invalid sequences replaced by U+FFFD, so
/// decoding itself never fails.
///
/// # Errors
///
/// Returns a `ScrapeError` transport variant on connect failure, timeout,
/// error status or an interrupted body.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    info!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| categorize_reqwest_error(url, e))?;

    debug!(
        "Response {} from {} (content-length: {:?})",
        response.status(),
        response.url(),
        response.content_length()
    );

    let bytes = response
        .bytes()
        .await
        .map_err(|e| categorize_reqwest_error(url, e))?;
    debug!("Read {} body bytes", bytes.len());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
