//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for building the request URL and fetching the page.
///
/// Transport variants wrap the underlying `reqwest::Error` so the full cause
/// chain is still printed when the run aborts.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The endpoint could not be parsed as a URL.
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request did not complete within the fetch timeout.
    #[error("Request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// DNS resolution or TCP/TLS connection failed.
    #[error("Failed to connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        url: String,
        status: u16,
        #[source]
        source: ReqwestError,
    },

    /// The response body could not be read.
    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// Any other request failure.
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Error types for rendering output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization or write error.
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing to the output stream.
    #[error("Output write error: {0}")]
    Io(#[from] std::io::Error),
}
