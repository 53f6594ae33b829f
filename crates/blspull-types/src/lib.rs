//! Core types for the blspull labor-statistics fetcher.
//!
//! This crate provides the fundamental data structures used throughout blspull:
//!
//! - [`Observation`] - A single monthly data point for a named series
//! - [`FetchState`] / [`StateSnapshot`] - Last-fetch record and its tagged on-disk state
//! - [`YearWindow`] - The rolling two-year request window
//! - [`PullError`] - Unified error enum for the fetch cycle

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blspull/blspull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod observation;
mod period;
mod state;
mod window;

pub use error::{PullError, Result};
pub use observation::Observation;
pub use period::monthly_period;
pub use state::{FetchState, StateSnapshot};
pub use window::YearWindow;
