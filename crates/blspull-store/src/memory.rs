//! In-memory store fakes for tests.

use std::sync::Mutex;

use blspull_types::{FetchState, Observation, StateSnapshot};

use crate::{DatasetStore, Result, StateStore};

/// In-memory dataset store.
#[derive(Debug, Default)]
pub struct MemoryDatasetStore {
    rows: Mutex<Option<Vec<Observation>>>,
}

impl MemoryDatasetStore {
    /// Creates an empty store (no dataset yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with an existing dataset.
    #[must_use]
    pub fn with_rows(rows: Vec<Observation>) -> Self {
        Self {
            rows: Mutex::new(Some(rows)),
        }
    }

    /// Returns a copy of the stored dataset.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<Observation>> {
        self.rows.lock().unwrap().clone()
    }
}

impl DatasetStore for MemoryDatasetStore {
    fn load(&self) -> Result<Option<Vec<Observation>>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn save(&self, rows: &[Observation]) -> Result<()> {
        *self.rows.lock().unwrap() = Some(rows.to_vec());
        Ok(())
    }
}

/// In-memory fetch-state store.
#[derive(Debug)]
pub struct MemoryStateStore {
    state: Mutex<StateSnapshot>,
}

impl MemoryStateStore {
    /// Creates a store with no recorded fetch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(StateSnapshot::Absent),
        }
    }

    /// Creates a store holding a recorded fetch.
    #[must_use]
    pub const fn with_state(state: FetchState) -> Self {
        Self {
            state: Mutex::new(StateSnapshot::Present(state)),
        }
    }

    /// Creates a store simulating an unreadable state file.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            state: Mutex::new(StateSnapshot::Invalid),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        *self.state.lock().unwrap()
    }
}

impl Default for MemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<StateSnapshot> {
        Ok(self.snapshot())
    }

    fn save(&self, state: FetchState) -> Result<()> {
        *self.state.lock().unwrap() = StateSnapshot::Present(state);
        Ok(())
    }
}
