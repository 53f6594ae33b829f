//! Fetch command implementation.
//!
//! Runs one fetch-merge cycle: checks freshness, issues the single request,
//! merges the monthly points into the dataset file and records the fetch date.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use inquire::Confirm;

use blspull_fetch::BlsClient;
use blspull_pipeline::{FetchOutcome, FreshnessTracker, Pipeline};
use blspull_series::SeriesCatalog;
use blspull_store::{CsvDatasetStore, JsonStateStore};
use blspull_types::YearWindow;

use crate::display::{days_ago, request_spinner};

/// Execute the fetch command.
pub(crate) async fn fetch(
    dataset: &Path,
    state_file: &Path,
    force: bool,
    yes: bool,
    quiet: bool,
) -> Result<()> {
    let today = Local::now().date_naive();
    let catalog = SeriesCatalog::bundled();
    let tracker = FreshnessTracker::new(JsonStateStore::new(state_file));

    if !force && !tracker.is_update_due(today) {
        if !quiet && let Some(last) = tracker.last_fetch() {
            println!(
                "Data was fetched {} ({}).",
                days_ago(last.age_days(today)),
                last.last_fetch
            );
        }
        if !yes {
            let proceed = Confirm::new("Fetch anyway?")
                .with_default(false)
                .prompt()
                .unwrap_or(false);
            if !proceed {
                if !quiet {
                    println!("Nothing to do.");
                }
                return Ok(());
            }
        }
    }

    let client = BlsClient::with_defaults().context("Failed to create HTTP client")?;
    let pipeline = Pipeline::new(client, catalog.clone(), CsvDatasetStore::new(dataset), tracker);

    let spinner = request_spinner(quiet);
    spinner.set_message(format!(
        "Fetching {} series for {}",
        catalog.len(),
        YearWindow::for_date(today)
    ));
    let outcome = pipeline.fetch_and_merge(today).await;
    spinner.finish_and_clear();

    match outcome.context("Fetch cycle failed")? {
        FetchOutcome::Merged { rows } => {
            if !quiet {
                println!("Dataset now holds {rows} rows ({}).", dataset.display());
                println!("Last fetch: {today}");
            }
        }
        FetchOutcome::NoData => {
            if !quiet {
                println!("No data was returned; dataset and fetch date left unchanged.");
            }
        }
    }

    Ok(())
}
