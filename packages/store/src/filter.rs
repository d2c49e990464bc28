//! Client-side search over a fetched snapshot.

use crate::models::Filterable;

/// Records whose display title contains `query`, ignoring case.
///
/// Snapshot order is preserved and an empty query returns everything.
pub fn filter_records<R: Filterable + Clone>(snapshot: &[R], query: &str) -> Vec<R> {
    if query.is_empty() {
        return snapshot.to_vec();
    }
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|record| record.display_title().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
