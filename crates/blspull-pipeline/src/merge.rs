//! Append-and-dedup merge.

use std::collections::HashSet;

use blspull_types::Observation;

/// Merges freshly fetched rows into the previously persisted ones.
///
/// The result is the union of both inputs with exact-duplicate rows (equality
/// across all columns, value compared bit-exactly) collapsed to one. The
/// first occurrence wins; row order carries no meaning beyond that.
#[must_use]
pub fn merge_rows(existing: Vec<Observation>, fresh: Vec<Observation>) -> Vec<Observation> {
    let mut seen: HashSet<(String, i32, u32, u64)> =
        HashSet::with_capacity(existing.len() + fresh.len());
    let mut merged = Vec::with_capacity(existing.len() + fresh.len());

    for row in existing.into_iter().chain(fresh) {
        let (name, year, month, bits) = row.dedup_key();
        let key = (name.to_string(), year, month, bits);
        if seen.insert(key) {
            merged.push(row);
        }
    }

    merged
}
