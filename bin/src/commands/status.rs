//! Status command implementation.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use chrono::Local;

use blspull_pipeline::FreshnessTracker;
use blspull_store::{CsvDatasetStore, DatasetStore, JsonStateStore};

use crate::display::days_ago;

/// Execute the status command.
pub(crate) fn status(dataset: &Path, state_file: &Path) -> Result<()> {
    let today = Local::now().date_naive();
    let tracker = FreshnessTracker::new(JsonStateStore::new(state_file));

    match tracker.last_fetch() {
        Some(state) => println!(
            "Last fetch: {} ({})",
            state.last_fetch,
            days_ago(state.age_days(today))
        ),
        None => println!("Last fetch: never"),
    }
    println!(
        "Update due: {}",
        if tracker.is_update_due(today) {
            "yes"
        } else {
            "no"
        }
    );

    let store = CsvDatasetStore::new(dataset);
    match store.load()? {
        Some(rows) => {
            println!("\nDataset: {} ({} rows)", dataset.display(), rows.len());

            // Per-series counts, in first-seen order.
            let mut order: Vec<&str> = Vec::new();
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for row in &rows {
                let name = row.series_name.as_str();
                if !counts.contains_key(name) {
                    order.push(name);
                }
                *counts.entry(name).or_insert(0) += 1;
            }

            println!("{:<45} {:>6}", "SERIES", "ROWS");
            println!("{}", "-".repeat(52));
            for name in order {
                println!("{:<45} {:>6}", name, counts[name]);
            }
        }
        None => println!("\nDataset: none yet ({})", dataset.display()),
    }

    Ok(())
}
