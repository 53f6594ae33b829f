//! Period-code interpretation.
//!
//! The source labels each data point with a period code: `M01`..`M12` for
//! calendar months, `M13` for the annual average, `Qxx` for quarters and
//! `A01` for annual figures. Only calendar months become dataset rows.

/// Returns the calendar month (1-12) for a monthly period code.
///
/// Any code that does not denote a calendar month (quarterly, annual,
/// annual-average `M13`, or something unrecognized) yields `None` and the
/// point is excluded from ingestion.
#[must_use]
pub fn monthly_period(code: &str) -> Option<u32> {
    let rest = code.strip_prefix('M')?;
    let month: u32 = rest.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}
