//! Ranked entry extraction.
//!
//! Scans the raw collection page for links to application detail pages and
//! turns them into an ordered, de-duplicated list of `RankedEntry`.
//!
//! Anchors are found by pattern matching over the raw text, not by building a
//! DOM. Anything that looks like a detail-page anchor is taken, including text
//! inside comments or scripts.

use regex::Regex;
use scraper::Html;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::models::RankedEntry;
use crate::utils::compile_regex_unsafe;

/// Detail-page anchor followed by its inline text.
///
/// Group 1 is the app id: everything after `id=` up to the next `&` or `"`.
const APP_LINK_PATTERN: &str =
    r#"(?i)<a[^>]+href="/store/apps/details\?id=([^&"]+)[^"]*"[^>]*>[^<]*"#;
const ARIA_LABEL_PATTERN: &str = r#"aria-label="([^"]+)""#;

static APP_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(APP_LINK_PATTERN, "APP_LINK_RE"));
static ARIA_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ARIA_LABEL_PATTERN, "ARIA_LABEL_RE"));

/// Extracts ranked entries from a collection page.
///
/// Entries come out in first-seen order. A repeated app id is dropped without
/// consuming a rank, so ranks are always `1..=len` with no gaps. The title is
/// the unescaped, trimmed `aria-label` found inside the matched anchor text,
/// or empty if there is none.
///
/// Never fails: a page with no matching anchors yields an empty vector.
///
/// # Arguments
///
/// * `html` - The raw page text
pub fn extract_entries(html: &str) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = 0usize;

    for caps in APP_LINK_RE.captures_iter(html) {
        matched += 1;
        let (Some(anchor), Some(app_id)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let app_id = app_id.as_str();
        if !seen.insert(app_id) {
            log::trace!("Skipping duplicate app id {}", app_id);
            continue;
        }

        let title = extract_label(anchor.as_str());
        let rank = u32::try_from(entries.len() + 1).unwrap_or(u32::MAX);
        entries.push(RankedEntry::new(rank, app_id, title));
    }

    log::debug!(
        "Matched {} detail anchors, kept {} entries ({} duplicates skipped)",
        matched,
        entries.len(),
        matched - entries.len()
    );

    entries
}

/// Returns the first `aria-label` value in `anchor`, unescaped and trimmed.
fn extract_label(anchor: &str) -> String {
    ARIA_LABEL_RE
        .captures(anchor)
        .and_then(|caps| caps.get(1))
        .map(|raw| unescape_entities(raw.as_str()).trim().to_string())
        .unwrap_or_default()
}

/// Decodes HTML character references in a label value.
///
/// The value is tokenized as text content, where legacy named references
/// without a trailing `;` (`&copy2024`, `&notit`) are still decoded, unlike
/// inside an attribute. `<` is pre-escaped so nothing in the value can open
/// a tag.
pub(crate) fn unescape_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let fragment = Html::parse_fragment(&raw.replace('<', "&lt;"));
    fragment.root_element().text().collect()
}
