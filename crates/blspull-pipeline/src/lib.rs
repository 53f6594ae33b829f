//! Freshness tracking and the fetch-merge pipeline for blspull.
//!
//! - [`FreshnessTracker`] decides whether a fetch is due and records
//!   successful fetches.
//! - [`merge_rows`] appends freshly fetched rows to the persisted ones and
//!   collapses exact duplicates.
//! - [`Pipeline`] wires client, catalog and stores into the single
//!   fetch-merge operation.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blspull/blspull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod freshness;
mod merge;
mod pipeline;

pub use freshness::{DEFAULT_MAX_AGE_DAYS, FreshnessTracker};
pub use merge::merge_rows;
pub use pipeline::{FetchOutcome, Pipeline};
