//! Series catalog for the blspull labor-statistics fetcher.
//!
//! This crate provides the fixed set of BLS series that blspull tracks,
//! as an immutable ordered mapping from series ID to human-readable name.
//!
//! # Example
//!
//! ```
//! use blspull_series::SeriesCatalog;
//!
//! let catalog = SeriesCatalog::global();
//!
//! assert_eq!(
//!     catalog.name_for("LNS14000000"),
//!     "Unemployment Rate (16+ years)"
//! );
//! // Unmapped IDs fall back to the raw ID.
//! assert_eq!(catalog.name_for("XXX999"), "XXX999");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blspull/blspull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// The series catalog JSON embedded at compile time.
const SERIES_JSON: &str = include_str!("../data/series.json");

/// Global catalog instance.
static CATALOG: OnceLock<SeriesCatalog> = OnceLock::new();

/// One catalog entry: a source-assigned series ID and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeriesEntry {
    /// Source-assigned series identifier, e.g. `LNS14000000`.
    pub id: String,
    /// Human-readable name used in the persisted dataset.
    pub name: String,
}

/// Ordered, immutable mapping from series ID to human-readable name.
///
/// The catalog is passed into the pipeline at construction time; it is never
/// mutated after creation, and iteration order is the declaration order.
#[derive(Debug, Clone)]
pub struct SeriesCatalog {
    entries: Vec<SeriesEntry>,
    index: HashMap<String, usize>,
}

impl SeriesCatalog {
    /// Returns the global catalog of bundled series.
    ///
    /// Initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::bundled)
    }

    /// Builds the catalog from the JSON data embedded at compile time.
    #[must_use]
    pub fn bundled() -> Self {
        let entries: Vec<SeriesEntry> =
            serde_json::from_str(SERIES_JSON).expect("Invalid series.json");
        Self::from_entries(entries)
    }

    /// Builds a catalog from explicit entries, preserving their order.
    #[must_use]
    pub fn from_entries(entries: Vec<SeriesEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.id.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Looks up an entry by series ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SeriesEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Resolves a series ID to its display name.
    ///
    /// Unmapped IDs fall back to the raw ID so unexpected series still
    /// produce rows with a stable schema.
    #[must_use]
    pub fn name_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |entry| entry.name.as_str())
    }

    /// Returns all entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.entries.iter()
    }

    /// Returns all series IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    /// Returns the number of configured series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog() {
        let catalog = SeriesCatalog::bundled();
        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = SeriesCatalog::global();
        let entry = catalog.get("CES0000000001").unwrap();
        assert_eq!(entry.name, "Total Nonfarm Employment");
        assert!(catalog.get("NOPE").is_none());
    }

    #[test]
    fn test_name_for_falls_back_to_raw_id() {
        let catalog = SeriesCatalog::global();
        assert_eq!(
            catalog.name_for("LNS14000000"),
            "Unemployment Rate (16+ years)"
        );
        assert_eq!(catalog.name_for("LNS99999999"), "LNS99999999");
    }

    #[test]
    fn test_order_is_declaration_order() {
        let catalog = SeriesCatalog::bundled();
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids[0], "LNS14000000");
        assert_eq!(ids[6], "CES0500000007");
    }

    #[test]
    fn test_from_entries() {
        let catalog = SeriesCatalog::from_entries(vec![SeriesEntry {
            id: "X1".to_string(),
            name: "Test Series".to_string(),
        }]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name_for("X1"), "Test Series");
    }
}
