//! Data model for a scraped ranking.

use serde::{Deserialize, Serialize};

/// One application in the ranking.
///
/// `rank` is the 1-based position among the kept entries, `app_id` is the
/// package name taken from the detail link, and `title` is the anchor's
/// `aria-label` (empty when the anchor has none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub app_id: String,
    pub title: String,
}

impl RankedEntry {
    pub fn new(rank: u32, app_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            rank,
            app_id: app_id.into(),
            title: title.into(),
        }
    }
}
