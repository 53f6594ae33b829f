//! Fetch freshness policy.

use chrono::NaiveDate;

use blspull_store::{StateStore, StoreError};
use blspull_types::{FetchState, StateSnapshot};

/// Whole days after which the persisted dataset counts as stale.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 30;

/// Decides whether a fetch is due and records successful fetches.
///
/// The comparison is by whole-day difference only; a fetch recorded exactly
/// `max_age_days` ago already counts as due.
#[derive(Debug)]
pub struct FreshnessTracker<S> {
    store: S,
    max_age_days: i64,
}

impl<S: StateStore> FreshnessTracker<S> {
    /// Creates a tracker with the default 30-day staleness threshold.
    pub const fn new(store: S) -> Self {
        Self::with_max_age(store, DEFAULT_MAX_AGE_DAYS)
    }

    /// Creates a tracker with a custom staleness threshold.
    pub const fn with_max_age(store: S, max_age_days: i64) -> Self {
        Self {
            store,
            max_age_days,
        }
    }

    /// Returns true if a fetch is due on `today`.
    ///
    /// Absent state, invalid state, and a store that fails to load all mean
    /// "not yet fetched", so they report due rather than erroring.
    pub fn is_update_due(&self, today: NaiveDate) -> bool {
        match self.store.load() {
            Ok(snapshot) => snapshot
                .state()
                .is_none_or(|state| state.age_days(today) >= self.max_age_days),
            Err(_) => true,
        }
    }

    /// Records a successful fetch on `today`.
    ///
    /// Overwrites any previous record; calling twice with the same date
    /// stores the same value.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be persisted.
    pub fn record_fetch(&self, today: NaiveDate) -> Result<(), StoreError> {
        self.store.save(FetchState::new(today))
    }

    /// Returns the last recorded fetch, if any.
    pub fn last_fetch(&self) -> Option<FetchState> {
        self.store
            .load()
            .unwrap_or(StateSnapshot::Invalid)
            .state()
    }
}
