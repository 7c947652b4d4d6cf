//! Command-line interface for inventory-fixtures.
//!
//! # Usage Examples
//!
//! ```bash
//! # Canonical sample file: 200 records over the last 90 days, 10% out of stock
//! inventory-fixtures
//!
//! # Larger dataset, everything in stock, custom output path
//! inventory-fixtures --num-records 5000 --out-of-stock-rate 0.0 -o inventory.csv
//!
//! # Reproducible data for a fixed seed
//! inventory-fixtures --seed 7 --days 30 -n 100
//! ```

use clap::Parser;
use inventory_fixtures::args::GenerateArgs;
use inventory_fixtures::{Catalog, CsvExporter, InventoryGenerator, InventoryRecord};
use std::collections::BTreeMap;
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = GenerateArgs::parse();

    let mut generator = InventoryGenerator::new(Catalog::default(), args.seed);
    let records = generator.generate(args.days, args.num_records, args.out_of_stock_rate)?;

    let metrics = CsvExporter::new()
        .with_header(!args.no_header)
        .export(&records, &args.output)?;

    println!(
        "CSV file '{}' created successfully with {} records!",
        args.output.display(),
        metrics.rows_written
    );
    log_summary(&records);

    Ok(())
}

/// Log dataset summary statistics: date range, stock-outs, category mix.
fn log_summary(records: &[InventoryRecord]) {
    if records.is_empty() {
        return;
    }

    let min_date = records.iter().map(|r| r.order_date).min();
    let max_date = records.iter().map(|r| r.order_date).max();
    if let (Some(min), Some(max)) = (min_date, max_date) {
        info!("Date range: {min} to {max}");
    }

    let out_of_stock = records.iter().filter(|r| r.quantity == 0).count();
    info!("Out of stock items: {out_of_stock}");

    let mut category_counts = BTreeMap::new();
    for record in records {
        *category_counts.entry(record.category.as_str()).or_insert(0u64) += 1;
    }
    info!("Categories: {category_counts:?}");
}
