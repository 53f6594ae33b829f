//! Display utilities for the blspull CLI.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the request is in flight.
pub(crate) fn request_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Human-friendly rendering of a whole-day age.
pub(crate) fn days_ago(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n => format!("{n} days ago"),
    }
}
