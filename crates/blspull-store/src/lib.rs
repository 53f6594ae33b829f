//! Persistent stores for the blspull labor-statistics fetcher.
//!
//! The pipeline never touches the filesystem directly; it is handed a
//! [`DatasetStore`] and a [`StateStore`] at construction time. The file-backed
//! implementations are [`CsvDatasetStore`] and [`JsonStateStore`]; the
//! `Memory*` variants back the test suites.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blspull/blspull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod error;
mod memory;
mod state;

pub use csv::{CSV_HEADER, CsvDatasetStore};
pub use error::{Result, StoreError};
pub use memory::{MemoryDatasetStore, MemoryStateStore};
pub use state::JsonStateStore;

use blspull_types::{FetchState, Observation, StateSnapshot};

/// Durable home of the observation dataset.
///
/// Exclusively written by the fetch-merge pipeline; every other collaborator
/// reads the file it produces.
pub trait DatasetStore {
    /// Loads the persisted rows, or `None` if no dataset exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing dataset cannot be read or interpreted.
    fn load(&self) -> Result<Option<Vec<Observation>>>;

    /// Replaces the persisted dataset with `rows`.
    ///
    /// The replacement is atomic with respect to partial writes: a concurrent
    /// reader sees either the previous dataset or the new one, never a
    /// half-written file.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be written.
    fn save(&self, rows: &[Observation]) -> Result<()>;
}

/// Durable home of the last-fetch record.
pub trait StateStore {
    /// Loads the stored state as a tagged snapshot.
    ///
    /// A missing file is [`StateSnapshot::Absent`]; an unreadable record is
    /// [`StateSnapshot::Invalid`]. Neither is an error.
    ///
    /// # Errors
    ///
    /// Returns an error only on I/O failure while reading an existing file.
    fn load(&self) -> Result<StateSnapshot>;

    /// Overwrites the stored state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save(&self, state: FetchState) -> Result<()>;
}
