//! Response parsing into observation rows.

use blspull_series::SeriesCatalog;
use blspull_types::{Observation, PullError, monthly_period};

use crate::wire::{ApiResponse, ApiResults};

/// Parses a raw response body into its wire shape.
///
/// # Errors
///
/// Returns [`PullError::MalformedResponse`] if the body is not JSON or the
/// `Results.series` payload is missing (e.g. the source reports
/// `REQUEST_NOT_PROCESSED`).
pub fn parse_response(body: &str) -> Result<ApiResults, PullError> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|e| PullError::MalformedResponse(e.to_string()))?;

    response.results.ok_or_else(|| {
        let status = response.status.as_deref().unwrap_or("unknown status");
        let detail = if response.message.is_empty() {
            status.to_string()
        } else {
            format!("{status}: {}", response.message.join("; "))
        };
        PullError::MalformedResponse(format!("missing Results.series ({detail})"))
    })
}

/// Builds observation rows from a parsed response.
///
/// Points whose period code is not a calendar month (`M01`..`M12`) are
/// discarded; the source also reports quarterly and annual aggregates under
/// distinct codes. Series IDs absent from the catalog keep the raw ID as
/// their name.
///
/// # Errors
///
/// Returns [`PullError::ParseFailure`] if any surviving point carries a year
/// or value that cannot be coerced. The failure is for the whole batch; no
/// partial ingestion of a malformed response.
pub fn observations(
    results: &ApiResults,
    catalog: &SeriesCatalog,
) -> Result<Vec<Observation>, PullError> {
    let mut rows = Vec::new();

    for series in &results.series {
        let name = catalog.name_for(&series.series_id);

        for point in &series.data {
            let Some(month) = monthly_period(&point.period) else {
                continue;
            };

            let year: i32 = point.year.parse().map_err(|_| {
                PullError::ParseFailure(format!(
                    "series {}: bad year {:?} for period {}",
                    series.series_id, point.year, point.period
                ))
            })?;
            let value: f64 = point.value.parse().map_err(|_| {
                PullError::ParseFailure(format!(
                    "series {}: bad value {:?} for {} {}",
                    series.series_id, point.value, point.year, point.period
                ))
            })?;

            rows.push(Observation::new(name.to_string(), year, month, value));
        }
    }

    Ok(rows)
}
