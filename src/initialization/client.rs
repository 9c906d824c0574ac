//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, FETCH_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the ranking page request.
///
/// Creates a `reqwest::Client` configured with:
/// - the desktop Chrome User-Agent (`DEFAULT_USER_AGENT`)
/// - a `FETCH_TIMEOUT` total request timeout
/// - reqwest's default redirect policy
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot be
/// set up.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_builds() {
        assert!(init_client().is_ok());
    }
}
