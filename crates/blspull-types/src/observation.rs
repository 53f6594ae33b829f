//! Observation row representation.

use serde::{Deserialize, Serialize};

/// A single monthly data point for a named series.
///
/// The dataset holds the union of all observations ever fetched, with exact
/// duplicate rows collapsed to one. Uniqueness is achieved by deduplication
/// after merge, not by an enforced key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Human-readable series name (raw source ID when unmapped).
    pub series_name: String,
    /// Calendar year of the observation.
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
    /// Reported value.
    pub value: f64,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(series_name: String, year: i32, month: u32, value: f64) -> Self {
        Self {
            series_name,
            year,
            month,
            value,
        }
    }

    /// Key used for exact-row deduplication.
    ///
    /// The value is compared through its bit pattern, so rows are equal only
    /// when every column matches exactly.
    #[must_use]
    pub fn dedup_key(&self) -> (&str, i32, u32, u64) {
        (
            self.series_name.as_str(),
            self.year,
            self.month,
            self.value.to_bits(),
        )
    }
}
