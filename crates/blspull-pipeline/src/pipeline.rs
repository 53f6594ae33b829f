//! The fetch-merge pipeline.

use chrono::NaiveDate;

use blspull_fetch::{BlsClient, parse};
use blspull_series::SeriesCatalog;
use blspull_store::{DatasetStore, StateStore};
use blspull_types::{Observation, PullError, Result, YearWindow};

use crate::{FreshnessTracker, merge_rows};

/// Result of a completed fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// New rows were merged and persisted.
    Merged {
        /// Total dataset rows after the merge (post-dedup).
        rows: usize,
    },
    /// The response was well-formed but held zero monthly points. Nothing
    /// was persisted and the fetch date was not advanced.
    NoData,
}

/// Fetches the configured series and merges them into the persisted dataset.
///
/// Construction injects the catalog and both stores, so tests run against
/// in-memory fakes and a throwaway endpoint.
#[derive(Debug)]
pub struct Pipeline<D, S> {
    client: BlsClient,
    catalog: SeriesCatalog,
    dataset: D,
    tracker: FreshnessTracker<S>,
}

impl<D: DatasetStore, S: StateStore> Pipeline<D, S> {
    /// Creates a pipeline over the given collaborators.
    pub const fn new(
        client: BlsClient,
        catalog: SeriesCatalog,
        dataset: D,
        tracker: FreshnessTracker<S>,
    ) -> Self {
        Self {
            client,
            catalog,
            dataset,
            tracker,
        }
    }

    /// Returns the freshness tracker.
    pub const fn tracker(&self) -> &FreshnessTracker<S> {
        &self.tracker
    }

    /// Returns true if a fetch is due on `today`.
    pub fn is_update_due(&self, today: NaiveDate) -> bool {
        self.tracker.is_update_due(today)
    }

    /// Runs one fetch cycle: a single request for all configured series over
    /// the rolling two-year window ending in `today`'s year, followed by an
    /// append-and-dedup merge.
    ///
    /// On any error, neither the dataset nor the fetch state is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`PullError::RequestFailed`] on transport failure or a
    /// non-success status, [`PullError::MalformedResponse`] when the payload
    /// shape is unexpected, [`PullError::ParseFailure`] when a monthly point
    /// cannot be coerced, and [`PullError::Store`] when persistence fails.
    pub async fn fetch_and_merge(&self, today: NaiveDate) -> Result<FetchOutcome> {
        let window = YearWindow::for_date(today);
        let ids: Vec<&str> = self.catalog.ids().collect();

        let body = self
            .client
            .fetch_window(ids, window)
            .await
            .map_err(|e| PullError::RequestFailed(e.to_string()))?;

        let results = parse::parse_response(&body)?;
        let fresh = parse::observations(&results, &self.catalog)?;

        self.ingest(fresh, today)
    }

    /// Merges already-parsed rows into the stores.
    ///
    /// An empty batch reports [`FetchOutcome::NoData`] and leaves both stores
    /// untouched; otherwise the merged dataset is persisted atomically and
    /// the fetch date is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`PullError::Store`] when loading or persisting fails.
    pub fn ingest(&self, fresh: Vec<Observation>, today: NaiveDate) -> Result<FetchOutcome> {
        if fresh.is_empty() {
            return Ok(FetchOutcome::NoData);
        }

        let existing = self.dataset.load()?.unwrap_or_default();
        let merged = merge_rows(existing, fresh);
        let rows = merged.len();

        self.dataset.save(&merged)?;
        self.tracker.record_fetch(today)?;

        Ok(FetchOutcome::Merged { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use blspull_fetch::ClientConfig;
    use blspull_series::SeriesEntry;
    use blspull_store::{MemoryDatasetStore, MemoryStateStore};
    use blspull_types::FetchState;

    fn obs(name: &str, year: i32, month: u32, value: f64) -> Observation {
        Observation::new(name.to_string(), year, month, value)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    fn catalog() -> SeriesCatalog {
        SeriesCatalog::from_entries(vec![SeriesEntry {
            id: "LNS14000000".to_string(),
            name: "Unemployment Rate (16+ years)".to_string(),
        }])
    }

    /// Client pointed at a closed loopback port: every request is refused
    /// locally, standing in for a transport failure.
    fn refused_client() -> BlsClient {
        BlsClient::new(ClientConfig {
            endpoint: "http://127.0.0.1:9/timeseries/data/".to_string(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap()
    }

    fn pipeline(
        dataset: MemoryDatasetStore,
        state: MemoryStateStore,
    ) -> Pipeline<MemoryDatasetStore, MemoryStateStore> {
        Pipeline::new(
            refused_client(),
            catalog(),
            dataset,
            FreshnessTracker::new(state),
        )
    }

    #[test]
    fn test_ingest_into_empty_dataset() {
        let p = pipeline(MemoryDatasetStore::new(), MemoryStateStore::new());
        let fresh = vec![obs("Unemployment Rate (16+ years)", 2024, 1, 3.7)];

        let outcome = p.ingest(fresh, today()).unwrap();
        assert_eq!(outcome, FetchOutcome::Merged { rows: 1 });
        assert_eq!(p.tracker().last_fetch(), Some(FetchState::new(today())));
    }

    #[test]
    fn test_ingest_merges_and_dedups_against_existing() {
        let existing = vec![obs("a", 2023, 12, 9.0), obs("a", 2024, 1, 1.0)];
        let dataset = MemoryDatasetStore::with_rows(existing);
        let p = pipeline(dataset, MemoryStateStore::new());

        // One duplicate of a persisted row, one genuinely new row.
        let fresh = vec![obs("a", 2024, 1, 1.0), obs("a", 2024, 2, 2.0)];
        let outcome = p.ingest(fresh, today()).unwrap();

        assert_eq!(outcome, FetchOutcome::Merged { rows: 3 });
    }

    #[test]
    fn test_ingesting_same_batch_twice_keeps_row_count() {
        let p = pipeline(MemoryDatasetStore::new(), MemoryStateStore::new());
        let fresh = vec![obs("a", 2024, 1, 1.0), obs("a", 2024, 2, 2.0)];

        let first = p.ingest(fresh.clone(), today()).unwrap();
        let second = p.ingest(fresh, today()).unwrap();

        assert_eq!(first, FetchOutcome::Merged { rows: 2 });
        assert_eq!(second, FetchOutcome::Merged { rows: 2 });
    }

    #[test]
    fn test_empty_batch_is_no_data_and_mutates_nothing() {
        let dataset = MemoryDatasetStore::with_rows(vec![obs("a", 2024, 1, 1.0)]);
        let state = MemoryStateStore::new();
        let p = pipeline(dataset, state);

        let outcome = p.ingest(Vec::new(), today()).unwrap();
        assert_eq!(outcome, FetchOutcome::NoData);
        assert_eq!(p.tracker().last_fetch(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_mutates_nothing() {
        let existing = vec![obs("a", 2024, 1, 1.0)];
        let dataset = MemoryDatasetStore::with_rows(existing.clone());
        let state = MemoryStateStore::with_state(FetchState::new(today()));
        let p = pipeline(dataset, state);

        let result = p.fetch_and_merge(today()).await;
        assert!(matches!(result, Err(PullError::RequestFailed(_))));

        // Both stores are exactly as they were before the attempt.
        assert_eq!(p.dataset.snapshot(), Some(existing));
        assert_eq!(
            p.tracker().last_fetch(),
            Some(FetchState::new(today()))
        );
    }

    #[test]
    fn test_is_update_due_delegates_to_tracker() {
        let p = pipeline(MemoryDatasetStore::new(), MemoryStateStore::new());
        assert!(p.is_update_due(today()));

        p.ingest(vec![obs("a", 2024, 1, 1.0)], today()).unwrap();
        assert!(!p.is_update_due(today()));
    }

    #[test]
    fn test_persisted_dataset_is_the_merged_union() {
        let dataset = MemoryDatasetStore::with_rows(vec![obs("a", 2023, 12, 9.0)]);
        let p = pipeline(dataset, MemoryStateStore::new());

        p.ingest(vec![obs("a", 2024, 1, 1.0)], today()).unwrap();

        let saved = p.dataset.snapshot().unwrap();
        assert_eq!(saved, vec![obs("a", 2023, 12, 9.0), obs("a", 2024, 1, 1.0)]);
    }
}
