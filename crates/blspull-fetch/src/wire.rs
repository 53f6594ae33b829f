//! Wire shapes of the BLS timeseries API.
//!
//! Request: JSON body with `seriesid` (array of IDs) and `startyear`/`endyear`
//! as string years. Response: `Results.series[]`, each with a `seriesID` and
//! `data[]` of `{period, year, value}` where year and value arrive as strings.

use blspull_types::YearWindow;
use serde::{Deserialize, Serialize};

/// Request body for the timeseries endpoint.
#[derive(Debug, Serialize)]
pub struct ApiRequest<'a> {
    /// Series IDs to fetch.
    pub seriesid: Vec<&'a str>,
    /// First year requested, as a string.
    pub startyear: String,
    /// Last year requested, as a string.
    pub endyear: String,
}

impl<'a> ApiRequest<'a> {
    /// Builds the request body for the given series over a year window.
    #[must_use]
    pub fn new(series_ids: Vec<&'a str>, window: YearWindow) -> Self {
        Self {
            seriesid: series_ids,
            startyear: window.start.to_string(),
            endyear: window.end.to_string(),
        }
    }
}

/// Top-level response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    /// Request status reported by the source, e.g. `REQUEST_SUCCEEDED`.
    #[serde(default)]
    pub status: Option<String>,
    /// Diagnostic messages reported by the source.
    #[serde(default)]
    pub message: Vec<String>,
    /// The payload; absent when the request was not processed.
    #[serde(rename = "Results")]
    pub results: Option<ApiResults>,
}

/// The `Results` object of a processed request.
#[derive(Debug, Deserialize)]
pub struct ApiResults {
    /// Per-series entries.
    #[serde(default)]
    pub series: Vec<ApiSeries>,
}

/// One series entry in the response.
#[derive(Debug, Deserialize)]
pub struct ApiSeries {
    /// Source-assigned series identifier.
    #[serde(rename = "seriesID")]
    pub series_id: String,
    /// Data points for this series.
    #[serde(default)]
    pub data: Vec<ApiPoint>,
}

/// One data point as reported by the source.
#[derive(Debug, Deserialize)]
pub struct ApiPoint {
    /// Period code, e.g. `M01` (monthly) or `Q01` (quarterly).
    pub period: String,
    /// Year, as a string.
    pub year: String,
    /// Value, as a string.
    pub value: String,
}
