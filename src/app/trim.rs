//! Result trimming.

use crate::models::RankedEntry;

/// Keeps the first `limit` entries, or all of them when `limit` is `None`.
///
/// Only a trailing slice is removed, so the remaining ranks stay `1..=n`.
pub fn trim_entries(mut entries: Vec<RankedEntry>, limit: Option<usize>) -> Vec<RankedEntry> {
    if let Some(limit) = limit {
        if entries.len() > limit {
            log::debug!("Trimming {} entries to {}", entries.len(), limit);
            entries.truncate(limit);
        }
    }
    entries
}
