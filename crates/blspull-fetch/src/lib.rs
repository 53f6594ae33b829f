//! HTTP client and response parsing for the blspull labor-statistics fetcher.
//!
//! - [`BlsClient`] issues the single POST to the BLS timeseries endpoint.
//! - [`wire`] holds the serde shapes of the request and response bodies.
//! - [`parse`] turns a response body into [`blspull_types::Observation`] rows.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blspull/blspull/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;
pub mod wire;

pub use client::{BlsClient, ClientConfig, DEFAULT_ENDPOINT, RequestError};
