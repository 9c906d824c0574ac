//! Transport error categorization.

use super::types::ScrapeError;

/// Categorizes a `reqwest::Error` into a `ScrapeError` for the given URL.
///
/// Status errors are checked first (they carry the code), then timeouts, then
/// connection failures, then body read failures. Anything else is reported as
/// a generic request failure.
pub fn categorize_reqwest_error(url: &str, error: reqwest::Error) -> ScrapeError {
    let url = url.to_string();

    if let Some(status) = error.status() {
        return ScrapeError::HttpStatus {
            url,
            status: status.as_u16(),
            source: error,
        };
    }

    if error.is_timeout() {
        ScrapeError::Timeout { url, source: error }
    } else if error.is_connect() {
        ScrapeError::Connect { url, source: error }
    } else if error.is_body() || error.is_decode() {
        ScrapeError::Body { url, source: error }
    } else {
        ScrapeError::Request { url, source: error }
    }
}
