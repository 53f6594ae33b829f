//! List command implementation.

use anyhow::Result;

use blspull_series::SeriesCatalog;

/// List the configured series in catalog order.
pub(crate) fn list_series() -> Result<()> {
    let catalog = SeriesCatalog::global();

    println!("{:<15} {:<45}", "ID", "NAME");
    println!("{}", "-".repeat(60));

    for entry in catalog.entries() {
        println!("{:<15} {:<45}", entry.id, entry.name);
    }

    println!("\nTotal: {} series", catalog.len());
    Ok(())
}
