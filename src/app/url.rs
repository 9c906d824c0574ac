//! Request URL construction.

use url::Url;

use crate::config::COLLECTION_URL;
use crate::error_handling::ScrapeError;

/// Builds the collection page URL for a language, region and optional category.
///
/// Query parameters are always appended in the order `hl`, `gl`, `category`
/// and are form-urlencoded. Values are not validated. An empty category is
/// treated as absent.
pub fn build_url(hl: &str, gl: &str, category: Option<&str>) -> Result<String, ScrapeError> {
    build_url_with_base(COLLECTION_URL, hl, gl, category)
}

/// Same as [`build_url`] against an arbitrary base URL.
pub fn build_url_with_base(
    base: &str,
    hl: &str,
    gl: &str,
    category: Option<&str>,
) -> Result<String, ScrapeError> {
    let mut url = Url::parse(base).map_err(|source| ScrapeError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("hl", hl).append_pair("gl", gl);
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            query.append_pair("category", category);
        }
    }

    Ok(url.into())
}
