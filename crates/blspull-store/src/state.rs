//! JSON-backed fetch-state store.

use std::fs;
use std::path::{Path, PathBuf};

use blspull_types::{FetchState, StateSnapshot};

use crate::{Result, StateStore, StoreError};

/// Fetch-state store backed by a single JSON file
/// (`{"last_fetch":"YYYY-MM-DD"}`).
///
/// A missing file loads as [`StateSnapshot::Absent`] and a file that fails to
/// parse as [`StateSnapshot::Invalid`]; both mean "not yet fetched" to the
/// freshness tracker.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Creates a store targeting the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the state file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> Result<StateSnapshot> {
        if !self.path.exists() {
            return Ok(StateSnapshot::Absent);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(serde_json::from_str::<FetchState>(&content)
            .map_or(StateSnapshot::Invalid, StateSnapshot::Present))
    }

    fn save(&self, state: FetchState) -> Result<()> {
        let json = serde_json::to_string(&state)?;
        fs::write(&self.path, json).map_err(|e| StoreError::WriteFile {
            path: self.path.clone(),
            source: e,
        })
    }
}
